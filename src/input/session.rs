use std::io::{BufRead, Write};

use log::debug;

use super::reader::TokenReader;
use crate::error::BoxoverError;
use crate::geom::Rect;

/// Geometry values already fixed by CLI arguments or config defaults.
/// `None` means the value is read interactively.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryArgs {
    pub length: Option<i64>,
    pub breadth: Option<i64>,
    pub x1: Option<i64>,
    pub y1: Option<i64>,
    pub x2: Option<i64>,
    pub y2: Option<i64>,
}

/// Interactive reading session pairing a token scanner with its prompts.
pub struct PromptSession<R, W> {
    tokens: TokenReader<R>,
    prompts: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            prompts,
        }
    }

    /// Collect both rectangles, prompting for every value not preset.
    ///
    /// Field order is fixed: length, breadth, x1, y1, x2, y2. Both
    /// rectangles share the single length/breadth pair.
    pub fn collect_rects(&mut self, preset: &GeometryArgs) -> Result<(Rect, Rect), BoxoverError> {
        let length = self.resolve(preset.length, "Enter the length of rectangle: ", "length")?;
        let breadth = self.resolve(preset.breadth, "Enter the breadth of rectangle: ", "breadth")?;
        let (x1, y1) = self.resolve_corner(preset.x1, preset.y1, "first", "x1", "y1")?;
        let (x2, y2) = self.resolve_corner(preset.x2, preset.y2, "second", "x2", "y2")?;

        Ok((
            Rect::new(x1, y1, length, breadth),
            Rect::new(x2, y2, length, breadth),
        ))
    }

    fn resolve(
        &mut self,
        preset: Option<i64>,
        prompt: &str,
        field: &'static str,
    ) -> Result<i64, BoxoverError> {
        if let Some(value) = preset {
            debug!("{} = {} (preset)", field, value);
            return Ok(value);
        }

        self.write_prompt(prompt, false)?;
        self.tokens.next_int(field)
    }

    /// Read one bottom-left corner. A fully interactive pair gets the
    /// combined two-value prompt; partially preset pairs prompt per
    /// missing component.
    fn resolve_corner(
        &mut self,
        preset_x: Option<i64>,
        preset_y: Option<i64>,
        which: &str,
        field_x: &'static str,
        field_y: &'static str,
    ) -> Result<(i64, i64), BoxoverError> {
        if preset_x.is_none() && preset_y.is_none() {
            let prompt = format!(
                "Enter bottom left x and y position of {} rectangle: ",
                which
            );
            self.write_prompt(&prompt, true)?;
            let x = self.tokens.next_int(field_x)?;
            let y = self.tokens.next_int(field_y)?;
            return Ok((x, y));
        }

        let x = self.resolve_component(preset_x, which, "x", field_x)?;
        let y = self.resolve_component(preset_y, which, "y", field_y)?;
        Ok((x, y))
    }

    fn resolve_component(
        &mut self,
        preset: Option<i64>,
        which: &str,
        axis: &str,
        field: &'static str,
    ) -> Result<i64, BoxoverError> {
        if let Some(value) = preset {
            debug!("{} = {} (preset)", field, value);
            return Ok(value);
        }

        let prompt = format!(
            "Enter bottom left {} position of {} rectangle: ",
            axis, which
        );
        self.write_prompt(&prompt, false)?;
        self.tokens.next_int(field)
    }

    /// Dimension prompts stay on the input line; pair prompts end it.
    fn write_prompt(&mut self, prompt: &str, own_line: bool) -> Result<(), BoxoverError> {
        let written = if own_line {
            writeln!(self.prompts, "{}", prompt)
        } else {
            write!(self.prompts, "{}", prompt)
        };

        written
            .and_then(|_| self.prompts.flush())
            .map_err(|source| BoxoverError::OutputWrite { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str, preset: &GeometryArgs) -> (Result<(Rect, Rect), BoxoverError>, String) {
        let mut prompts = Vec::new();
        let result = {
            let mut session = PromptSession::new(input.as_bytes(), &mut prompts);
            session.collect_rects(preset)
        };
        (result, String::from_utf8(prompts).unwrap())
    }

    #[test]
    fn test_fully_interactive() {
        let (result, prompts) = run_session("2 2 0 0 2 0\n", &GeometryArgs::default());

        let (first, second) = result.unwrap();
        assert_eq!(first, Rect::new(0, 0, 2, 2));
        assert_eq!(second, Rect::new(2, 0, 2, 2));

        assert_eq!(
            prompts,
            "Enter the length of rectangle: \
             Enter the breadth of rectangle: \
             Enter bottom left x and y position of first rectangle: \n\
             Enter bottom left x and y position of second rectangle: \n"
        );
    }

    #[test]
    fn test_presets_skip_prompts() {
        let preset = GeometryArgs {
            length: Some(4),
            breadth: Some(4),
            ..Default::default()
        };
        let (result, prompts) = run_session("0 0 2 2\n", &preset);

        let (first, second) = result.unwrap();
        assert_eq!(first, Rect::new(0, 0, 4, 4));
        assert_eq!(second, Rect::new(2, 2, 4, 4));
        assert!(!prompts.contains("length"));
        assert!(!prompts.contains("breadth"));
    }

    #[test]
    fn test_partially_preset_corner_prompts_per_component() {
        let preset = GeometryArgs {
            length: Some(2),
            breadth: Some(2),
            x1: Some(1),
            ..Default::default()
        };
        let (result, prompts) = run_session("5 3 3\n", &preset);

        let (first, _) = result.unwrap();
        assert_eq!(first, Rect::new(1, 5, 2, 2));
        assert!(prompts.contains("Enter bottom left y position of first rectangle: "));
        assert!(!prompts.contains("x and y position of first"));
    }

    #[test]
    fn test_all_preset_reads_nothing() {
        let preset = GeometryArgs {
            length: Some(2),
            breadth: Some(2),
            x1: Some(0),
            y1: Some(0),
            x2: Some(1),
            y2: Some(1),
        };
        let (result, prompts) = run_session("", &preset);

        assert!(result.is_ok());
        assert!(prompts.is_empty());
    }

    #[test]
    fn test_parse_failure_carries_field() {
        let (result, _) = run_session("2 2 zero 0 2 0\n", &GeometryArgs::default());

        match result {
            Err(BoxoverError::InvalidInteger { field, token, .. }) => {
                assert_eq!(field, "x1");
                assert_eq!(token, "zero");
            }
            other => panic!("expected InvalidInteger, got {:?}", other),
        }
    }
}
