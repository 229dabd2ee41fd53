use alloc::boxed::Box;
use alloc::vec;

/**
 * Fixed-size byte ring buffer. It performs no locking of its own; the owner
 * is expected to wrap it in whatever lock guards the rest of its state.
 */
pub struct RingBuffer {
  /// Index of the first unread byte
  head: usize,
  /// Number of bytes written, but not yet read
  length: usize,
  data: Box<[u8]>,
}

impl RingBuffer {
  pub fn new(capacity: usize) -> RingBuffer {
    RingBuffer {
      head: 0,
      length: 0,
      data: vec![0; capacity].into_boxed_slice(),
    }
  }

  pub fn capacity(&self) -> usize {
    self.data.len()
  }

  /**
   * Read elements from the buffer into a byte slice.
   * Bytes will be copied into the slice until either the data in the buffer has
   * been exhausted, or the slice has been filled. The method returns the number
   * of copied bytes.
   */
  pub fn read(&mut self, dest: &mut [u8]) -> usize {
    let to_read = dest.len().min(self.length);
    let capacity = self.capacity();
    for (i, byte) in dest.iter_mut().take(to_read).enumerate() {
      *byte = self.data[(self.head + i) % capacity];
    }
    if to_read > 0 {
      self.head = (self.head + to_read) % capacity;
      self.length -= to_read;
    }
    to_read
  }

  /**
   * Write elements to the buffer from a byte slice.
   * Bytes will be copied from the slice to the current tail of the buffer. If
   * there is not enough room remaining in the buffer, bytes will be copied
   * until the buffer is full.
   * The method returns the number of copied bytes.
   */
  pub fn write(&mut self, src: &[u8]) -> usize {
    let to_write = src.len().min(self.available_room());
    let capacity = self.capacity();
    let tail = self.head + self.length;
    for (i, byte) in src.iter().take(to_write).enumerate() {
      self.data[(tail + i) % capacity] = *byte;
    }
    self.length += to_write;
    to_write
  }

  /**
   * Fetch the "length" of the buffer, representing the number of bytes that
   * have been written, but not yet read.
   */
  pub fn available_bytes(&self) -> usize {
    self.length
  }

  pub fn available_room(&self) -> usize {
    self.capacity() - self.length
  }

  /**
   * Empty all data from the buffer by moving the head up to meet the tail.
   */
  pub fn drain(&mut self) {
    if self.capacity() > 0 {
      self.head = (self.head + self.length) % self.capacity();
    }
    self.length = 0;
  }
}
