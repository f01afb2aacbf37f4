mod compression;
pub use compression::RasterCompression;

use derive_more::From;

/// One row of the raster, 8 pixels per byte with the most significant bit leftmost.
///
/// A set bit is ink. Lines of one page may differ in length; shorter lines are
/// implicitly padded with zero bytes on the right.
pub type ScanLine = Vec<u8>;

/// A decoded page: the scan lines collected between two page boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, From)]
pub struct Page {
    lines: Vec<ScanLine>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the page in bytes, i.e. the length of its longest line.
    pub fn width_bytes(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn width_pixels(&self) -> usize {
        self.width_bytes() * 8
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[ScanLine] {
        &self.lines
    }

    pub fn push_line(&mut self, line: ScanLine) {
        self.lines.push(line);
    }

    /// Iterates over the rows of the page, each right-padded with zeros to [`Page::width_bytes`].
    pub fn padded_rows(&self) -> impl Iterator<Item = ScanLine> + '_ {
        let width = self.width_bytes();
        self.lines.iter().map(move |line| {
            let mut row = line.clone();
            row.resize(width, 0);
            row
        })
    }

    /// The lines without their trailing zero bytes, which render as blank paper.
    ///
    /// Two pages with equal ink print identically even if their stored line lengths differ.
    pub fn ink(&self) -> Vec<&[u8]> {
        self.lines
            .iter()
            .map(|line| {
                let end = line.iter().rposition(|&byte| byte != 0).map_or(0, |i| i + 1);
                &line[..end]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn test_dimensions() {
        let page = Page::from(vec![vec![0xff], vec![], vec![0x00, 0x80, 0x01]]);
        assert_eq!(page.width_bytes(), 3);
        assert_eq!(page.width_pixels(), 24);
        assert_eq!(page.height(), 3);
        assert!(!page.is_empty());
        assert!(Page::new().is_empty());
        assert_eq!(Page::new().width_bytes(), 0);
    }

    #[test]
    fn test_padded_rows() {
        let page = Page::from(vec![vec![0xff], vec![], vec![0x00, 0x80, 0x01]]);
        let rows: Vec<_> = page.padded_rows().collect();
        assert_eq!(
            rows,
            vec![
                vec![0xff, 0x00, 0x00],
                vec![0x00, 0x00, 0x00],
                vec![0x00, 0x80, 0x01]
            ]
        );
    }

    #[test]
    fn test_ink_ignores_trailing_paper() {
        let stored = Page::from(vec![vec![0x00, 0x80, 0x00, 0x00], vec![0x00], vec![]]);
        let trimmed = Page::from(vec![vec![0x00, 0x80], vec![], vec![]]);
        assert_ne!(stored, trimmed);
        assert_eq!(stored.ink(), trimmed.ink());
        assert_eq!(stored.ink()[0], &[0x00, 0x80][..]);
    }
}
