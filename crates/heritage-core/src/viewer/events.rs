use std::fmt;
use std::str::FromStr;

use crate::error::{HeritageError, Result};
use crate::geometry::Vec2;

/// Keys the immersive viewer understands. Everything else maps to `Other`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Other(String),
}

impl FromStr for ViewerKey {
    type Err = HeritageError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }
        Ok(match s.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Self::Escape,
            "left" | "arrowleft" => Self::ArrowLeft,
            "right" | "arrowright" => Self::ArrowRight,
            "" => return Err(HeritageError::InvalidEvent("empty key name".into())),
            _ => Self::Other(s.to_string()),
        })
    }
}

impl fmt::Display for ViewerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => write!(f, "Escape"),
            Self::ArrowLeft => write!(f, "ArrowLeft"),
            Self::ArrowRight => write!(f, "ArrowRight"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// One user input, in the order it arrived.
///
/// Text form (used by scripted replays): `select:<id>`, `next`, `prev`,
/// `enter`, `exit`, `close`, `drag-start:<x>,<y>`, `drag:<x>,<y>,<dx>,<dy>`,
/// `drag-end`, `zoom:<delta>`, `reset`, `key:<name>`.
#[derive(Clone, Debug, PartialEq)]
pub enum TourEvent {
    SelectTourPoint(String),
    NextImage,
    PreviousImage,
    EnterImmersive,
    ExitImmersive,
    Close,
    DragStart(Vec2),
    Drag { pointer: Vec2, delta: Vec2 },
    DragEnd,
    Zoom(f32),
    Reset,
    Key(ViewerKey),
}

/// Whether the tour keeps running after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

impl FromStr for TourEvent {
    type Err = HeritageError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (s, None),
        };

        let event = match (name.to_ascii_lowercase().as_str(), arg) {
            ("select", Some(id)) if !id.is_empty() => Self::SelectTourPoint(id.to_string()),
            ("next", None) => Self::NextImage,
            ("prev" | "previous", None) => Self::PreviousImage,
            ("enter", None) => Self::EnterImmersive,
            ("exit", None) => Self::ExitImmersive,
            ("close", None) => Self::Close,
            ("drag-start", Some(args)) => {
                let [x, y] = parse_floats::<2>(args, s)?;
                Self::DragStart(Vec2::new(x, y))
            }
            ("drag", Some(args)) => {
                let [x, y, dx, dy] = parse_floats::<4>(args, s)?;
                Self::Drag {
                    pointer: Vec2::new(x, y),
                    delta: Vec2::new(dx, dy),
                }
            }
            ("drag-end", None) => Self::DragEnd,
            ("zoom", Some(args)) => {
                let [delta] = parse_floats::<1>(args, s)?;
                Self::Zoom(delta)
            }
            ("reset", None) => Self::Reset,
            ("key", Some(key)) => Self::Key(key.parse()?),
            _ => return Err(HeritageError::InvalidEvent(s.to_string())),
        };
        Ok(event)
    }
}

impl fmt::Display for TourEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectTourPoint(id) => write!(f, "select:{id}"),
            Self::NextImage => write!(f, "next"),
            Self::PreviousImage => write!(f, "prev"),
            Self::EnterImmersive => write!(f, "enter"),
            Self::ExitImmersive => write!(f, "exit"),
            Self::Close => write!(f, "close"),
            Self::DragStart(p) => write!(f, "drag-start:{},{}", p.x, p.y),
            Self::Drag { pointer, delta } => {
                write!(f, "drag:{},{},{},{}", pointer.x, pointer.y, delta.x, delta.y)
            }
            Self::DragEnd => write!(f, "drag-end"),
            Self::Zoom(delta) => write!(f, "zoom:{delta}"),
            Self::Reset => write!(f, "reset"),
            Self::Key(key) => write!(f, "key:{key}"),
        }
    }
}

/// Parse exactly `N` comma-separated floats.
fn parse_floats<const N: usize>(args: &str, event: &str) -> Result<[f32; N]> {
    let mut out = [0.0; N];
    let mut parts = args.split(',');
    for slot in out.iter_mut() {
        *slot = parts
            .next()
            .and_then(|p| p.trim().parse().ok())
            .ok_or_else(|| HeritageError::InvalidEvent(event.to_string()))?;
    }
    if parts.next().is_some() {
        return Err(HeritageError::InvalidEvent(event.to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_floats_exact_count() {
        assert_eq!(parse_floats::<2>("1.5, -2", "e").unwrap(), [1.5, -2.0]);
        assert!(parse_floats::<2>("1.5", "e").is_err());
        assert!(parse_floats::<2>("1,2,3", "e").is_err());
        assert!(parse_floats::<1>("abc", "e").is_err());
    }

    #[test]
    fn single_character_is_char_key() {
        assert_eq!("r".parse::<ViewerKey>().unwrap(), ViewerKey::Char('r'));
        assert_eq!("R".parse::<ViewerKey>().unwrap(), ViewerKey::Char('R'));
        assert_eq!("Esc".parse::<ViewerKey>().unwrap(), ViewerKey::Escape);
        assert_eq!(
            "PageUp".parse::<ViewerKey>().unwrap(),
            ViewerKey::Other("PageUp".into())
        );
    }
}
