/// A single change to the previous line: skip `offset` bytes, then write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Writes `count` (at least 2) copies of `value`.
    Repeat {
        offset: usize,
        count: usize,
        value: u8,
    },
    /// Writes the literal bytes of `data` (at least 1).
    Substitute { offset: usize, data: Vec<u8> },
}

impl Edit {
    pub fn offset(&self) -> usize {
        match self {
            Edit::Repeat { offset, .. } | Edit::Substitute { offset, .. } => *offset,
        }
    }

    /// Number of bytes written by the edit.
    pub fn len(&self) -> usize {
        match self {
            Edit::Repeat { count, .. } => *count,
            Edit::Substitute { data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Edit::Repeat {
                offset,
                count,
                value,
            } => {
                debug_assert!(*count >= 2);
                let count = count - 2;
                out.push(0x80 | (((*offset).min(0x03) as u8) << 5) | count.min(0x1f) as u8);
                if *offset >= 0x03 {
                    write_overflow(offset - 0x03, out);
                }
                if count >= 0x1f {
                    write_overflow(count - 0x1f, out);
                }
                out.push(*value);
            }
            Edit::Substitute { offset, data } => {
                debug_assert!(!data.is_empty());
                let count = data.len() - 1;
                out.push((((*offset).min(0x0f) as u8) << 3) | count.min(0x07) as u8);
                if *offset >= 0x0f {
                    write_overflow(offset - 0x0f, out);
                }
                if count >= 0x07 {
                    write_overflow(count - 0x07, out);
                }
                out.extend_from_slice(data);
            }
        }
    }
}

/// Inverse of [`crate::decode::read_overflow`].
pub fn write_overflow(mut value: usize, out: &mut Vec<u8>) {
    while value >= 0xff {
        out.push(0xff);
        value -= 0xff;
    }
    out.push(value as u8);
}

#[cfg(test)]
mod tests {
    use super::{write_overflow, Edit};
    use crate::decode::read_overflow;

    fn encoded(edit: Edit) -> Vec<u8> {
        let mut out = Vec::new();
        edit.write_to(&mut out);
        out
    }

    #[test]
    fn test_write_overflow() {
        for value in [0, 1, 254, 255, 256, 510, 515, 1000] {
            let mut out = Vec::new();
            write_overflow(value, &mut out);
            assert_eq!(out.last().copied().map(|b| b != 0xff), Some(true));
            assert_eq!(read_overflow(&mut out.as_slice()).unwrap(), value);
        }
        let mut out = Vec::new();
        write_overflow(258, &mut out);
        assert_eq!(out, vec![0xff, 0x03]);
    }

    #[test]
    fn test_repeat_layout() {
        assert_eq!(
            encoded(Edit::Repeat {
                offset: 0,
                count: 4,
                value: 0xff
            }),
            vec![0x82, 0xff]
        );
        assert_eq!(
            encoded(Edit::Repeat {
                offset: 2,
                count: 2,
                value: 0xaa
            }),
            vec![0xc0, 0xaa]
        );
        assert_eq!(
            encoded(Edit::Repeat {
                offset: 0,
                count: 291,
                value: 0x00
            }),
            vec![0x9f, 0xff, 0x03, 0x00]
        );
        assert_eq!(
            encoded(Edit::Repeat {
                offset: 3,
                count: 33,
                value: 0x01
            }),
            vec![0xff, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_substitute_layout() {
        assert_eq!(
            encoded(Edit::Substitute {
                offset: 0,
                data: vec![0xa5]
            }),
            vec![0x00, 0xa5]
        );
        assert_eq!(
            encoded(Edit::Substitute {
                offset: 4,
                data: vec![0xbb]
            }),
            vec![0x20, 0xbb]
        );
        assert_eq!(
            encoded(Edit::Substitute {
                offset: 15,
                data: vec![1, 2, 3, 4, 5, 6, 7, 8]
            }),
            vec![0x7f, 0x00, 0x00, 1, 2, 3, 4, 5, 6, 7, 8]
        );
    }
}
