// src/parse.rs
//! Reads point lists in the `x,y,z` line format.

use crate::error::{ClusterError, Result};
use crate::types::Point;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Parses one point per non-empty line. Whitespace around numbers is ignored.
///
/// # Errors
/// Returns `Parse` with the 1-based line number of the first malformed line.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_line(line).ok_or_else(|| ClusterError::Parse {
                line: idx + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Option<Point> {
    let mut fields = line.split(',').map(|f| f.trim().parse::<i64>());
    let x = fields.next()?.ok()?;
    let y = fields.next()?.ok()?;
    let z = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(x, y, z))
}

/// Reads and parses points from `path`, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns `Io` if the input cannot be read, `Parse` if a line is malformed.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ClusterError::Io {
                source,
                path: PathBuf::from("<stdin>"),
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| ClusterError::Io {
            source,
            path: path.to_path_buf(),
        })?
    };
    parse_points(&content)
}
