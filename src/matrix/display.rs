use crate::matrix::dense::Matrix;
use crate::matrix::vector::Vector;
use std::fmt;

/// Renders `[a, b\n c, d]`: one row per line, entries comma-separated.
/// The formatter's precision (`{:.3}`) is applied to every entry.
impl<K: fmt::Display> fmt::Display for Matrix<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for i in 0..self.height() {
            write!(f, "{}", if i == 0 { '[' } else { ' ' })?;
            for (j, x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{x:.p$}")?,
                    None => write!(f, "{x}")?,
                }
            }
            write!(f, "{}", if i + 1 == self.height() { "]" } else { "\n" })?;
        }
        Ok(())
    }
}

impl<K: fmt::Display> fmt::Display for Vector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_matrix(), f)
    }
}
