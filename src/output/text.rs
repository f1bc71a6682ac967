use std::io::Write;

use crate::error::BoxoverError;

/// Write the fixed one-line verdict
pub fn write_verdict<W: Write>(out: &mut W, collides: bool) -> Result<(), BoxoverError> {
    let line = if collides {
        "Rectangles collide!"
    } else {
        "Rectangles do not collide."
    };

    writeln!(out, "{}", line).map_err(|source| BoxoverError::OutputWrite { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colliding_verdict_line() {
        let mut out = Vec::new();
        write_verdict(&mut out, true).unwrap();
        assert_eq!(out, b"Rectangles collide!\n");
    }

    #[test]
    fn test_non_colliding_verdict_line() {
        let mut out = Vec::new();
        write_verdict(&mut out, false).unwrap();
        assert_eq!(out, b"Rectangles do not collide.\n");
    }
}
