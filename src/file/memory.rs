use super::Backend;

/// Manifest input backed by an owned buffer
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Create a new memory backend
    ///
    /// ## Arguments
    /// * 'data' - The data buffer to consume
    #[must_use]
    pub fn new(data: Vec<u8>) -> Memory {
        Memory { data }
    }
}

impl Backend for Memory {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}
