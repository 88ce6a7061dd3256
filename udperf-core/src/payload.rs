use bytes::{BufMut, Bytes, BytesMut};

/// Fills packet payloads with a repeating filler pattern, truncated to the
/// exact requested size. The pattern is plain ASCII so captures stay readable
/// in a packet dump.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    pattern: Bytes,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        PayloadBuilder::new(Bytes::from_static(b"0123456789"))
    }
}

impl PayloadBuilder {
    pub fn new(pattern: Bytes) -> Self {
        assert!(!pattern.is_empty(), "filler pattern must be non-empty");
        PayloadBuilder { pattern }
    }

    pub fn build(&self, size: usize) -> Bytes {
        let mut buf = BytesMut::with_capacity(size);
        while buf.len() < size {
            let take = usize::min(self.pattern.len(), size - buf.len());
            buf.put_slice(&self.pattern[..take]);
        }
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_exact_size() {
        let builder = PayloadBuilder::default();

        assert_eq!(builder.build(0).len(), 0);
        assert_eq!(builder.build(10).len(), 10);
        assert_eq!(builder.build(1470).len(), 1470);
    }

    #[test]
    fn repeats_and_truncates_the_pattern() {
        let builder = PayloadBuilder::default();

        let payload = builder.build(25);

        assert_eq!(&payload[..], b"0123456789012345678901234");
    }

    #[test]
    fn custom_pattern() {
        let builder = PayloadBuilder::new(Bytes::from_static(b"ab"));

        assert_eq!(&builder.build(5)[..], b"ababa");
    }
}
