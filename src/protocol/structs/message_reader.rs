#[derive(Debug)]
pub struct MessageReader {
    pub(crate) buffer: Vec<u8>,
    pub(crate) limit: usize,
}
