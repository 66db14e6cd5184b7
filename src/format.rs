use std::fmt;

/// A single line of tree output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Canvas {
        name: &'a str,
        id: &'a str,
    },
    Node {
        depth: usize,
        name: &'a str,
        kind: &'a str,
        id: &'a str,
    },
}

impl<'a> fmt::Display for Line<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Line::Canvas { name, id } => write!(fmt, "Canvas: {} ({})", name, id),
            Line::Node {
                depth,
                name,
                kind,
                id,
            } => write!(
                fmt,
                "{:indent$}{} [{}] {}",
                "",
                name,
                kind,
                id,
                indent = depth * 2
            ),
        }
    }
}
