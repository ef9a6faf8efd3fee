//! Bracket matching by depth counting scans over the raw program.

use std::fmt::Display;

use thiserror::Error;

/// Which way a scan was travelling.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

impl Display for ScanDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScanDirection::Forward => write!(f, "no matching ] after the [ at"),
            ScanDirection::Backward => write!(f, "no matching [ before the ] at"),
        }
    }
}

/// A scan ran off the end (or start) of the program.
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq)]
#[error("Unmatched bracket: {direction} offset {position}")]
pub struct UnmatchedBracket {
    /// Position of the bracket the scan started from.
    pub position: usize,
    pub direction: ScanDirection,
}

/// Find the `]` matching the `[` at `start`.
///
/// Bytes other than brackets are skipped. The returned index is that of the
/// matching `]`.
pub fn scan_forward_match(program: &[u8], start: usize) -> Result<usize, UnmatchedBracket> {
    let mut depth = 1usize;
    let mut pos = start;
    while depth > 0 {
        pos += 1;
        match program.get(pos) {
            Some(b'[') => depth += 1,
            Some(b']') => depth -= 1,
            Some(_) => (),
            None => {
                return Err(UnmatchedBracket {
                    position: start,
                    direction: ScanDirection::Forward,
                })
            }
        }
    }
    Ok(pos)
}

/// Find the `[` matching the `]` at `start`.
pub fn scan_backward_match(program: &[u8], start: usize) -> Result<usize, UnmatchedBracket> {
    let mut depth = 1usize;
    let mut pos = start;
    while depth > 0 {
        let unmatched = UnmatchedBracket {
            position: start,
            direction: ScanDirection::Backward,
        };
        pos = pos.checked_sub(1).ok_or(unmatched)?;
        match program.get(pos) {
            Some(b']') => depth += 1,
            Some(b'[') => depth -= 1,
            Some(_) => (),
            // Only reachable when starting beyond the end of the program.
            None => return Err(unmatched),
        }
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::{scan_backward_match, scan_forward_match, ScanDirection, UnmatchedBracket};

    #[test]
    fn test_forward() {
        assert_eq!(scan_forward_match(b"[]", 0), Ok(1));
        assert_eq!(scan_forward_match(b"+[-[>]<]+", 1), Ok(7));
        assert_eq!(scan_forward_match(b"+[-[>]<]+", 3), Ok(5));
        assert_eq!(scan_forward_match(b"[ comment ]", 0), Ok(10));
    }

    #[test]
    fn test_backward() {
        assert_eq!(scan_backward_match(b"[]", 1), Ok(0));
        assert_eq!(scan_backward_match(b"+[-[>]<]+", 7), Ok(1));
        assert_eq!(scan_backward_match(b"+[-[>]<]+", 5), Ok(3));
        assert_eq!(scan_backward_match(b"[[][]]", 5), Ok(0));
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(
            scan_forward_match(b"[", 0),
            Err(UnmatchedBracket {
                position: 0,
                direction: ScanDirection::Forward
            })
        );
        assert_eq!(
            scan_forward_match(b"+[[]", 1),
            Err(UnmatchedBracket {
                position: 1,
                direction: ScanDirection::Forward
            })
        );
        assert_eq!(
            scan_backward_match(b"]", 0),
            Err(UnmatchedBracket {
                position: 0,
                direction: ScanDirection::Backward
            })
        );
        assert_eq!(
            scan_backward_match(b"[]]", 2),
            Err(UnmatchedBracket {
                position: 2,
                direction: ScanDirection::Backward
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = scan_forward_match(b"ab[", 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unmatched bracket: no matching ] after the [ at offset 2"
        );
    }
}
