use crate::format::Line;
use serde_json::Value;
use std::io::{self, Write};
use std::slice;

const CANVAS: &str = "CANVAS";
const LISTED_KINDS: &[&str] = &["FRAME", "COMPONENT", "COMPONENT_SET"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only the direct children of each canvas
    Shallow,
    /// Every descendant of each canvas
    Deep,
}

pub fn print<W: Write>(document: &Value, mode: Mode, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for line in lines(document, mode) {
        writeln!(out, "{}", line)?;
        count += 1;
    }

    Ok(count)
}

pub fn lines(document: &Value, mode: Mode) -> Lines<'_> {
    let root = document.get("document").unwrap_or(&Value::Null);

    Lines {
        mode,
        canvases: children(root).iter(),
        stack: vec![],
    }
}

/// Depth-first iterator over the printable lines of a document.
pub struct Lines<'a> {
    mode: Mode,
    canvases: slice::Iter<'a, Value>,
    // one entry per open level of the current canvas
    stack: Vec<(slice::Iter<'a, Value>, usize)>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        loop {
            if let Some((siblings, depth)) = self.stack.last_mut() {
                let depth = *depth;
                let node = match siblings.next() {
                    Some(node) => node,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                };

                if let Mode::Deep = self.mode {
                    let nested = children(node);
                    if !nested.is_empty() {
                        self.stack.push((nested.iter(), depth + 1));
                    }
                }

                match kind(node) {
                    Some(kind) if LISTED_KINDS.contains(&kind) => {
                        return Some(Line::Node {
                            depth,
                            name: field(node, "name"),
                            kind,
                            id: field(node, "id"),
                        });
                    }
                    _ => continue,
                }
            }

            let canvas = self.canvases.next()?;
            if kind(canvas) != Some(CANVAS) {
                continue;
            }

            self.stack.push((children(canvas).iter(), 1));
            return Some(Line::Canvas {
                name: field(canvas, "name"),
                id: field(canvas, "id"),
            });
        }
    }
}

fn children(node: &Value) -> &[Value] {
    node.get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn kind(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

fn field<'a>(node: &'a Value, key: &str) -> &'a str {
    node.get(key).and_then(Value::as_str).unwrap_or("")
}
