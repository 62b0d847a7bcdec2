/// Level placement files: one `TAG,x,y` record per line.

use std::path::Path;

use tracing::info;

use crate::entities::EntityTag;
use crate::error::LevelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub tag: EntityTag,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(tag: EntityTag, x: i32, y: i32) -> Self {
        Self { tag, x, y }
    }
}

/// Parse every record.  Blank lines are skipped; any other bad line fails
/// the whole level.
pub fn parse_placements(src: &str) -> Result<Vec<Placement>, LevelError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_record(i + 1, line))
        .collect()
}

fn parse_record(line_no: usize, line: &str) -> Result<Placement, LevelError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[tag, x, y] = fields.as_slice() else {
        return Err(LevelError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    let tag = tag.parse::<EntityTag>().map_err(|_| LevelError::UnknownTag {
        line: line_no,
        tag: tag.to_string(),
    })?;
    Ok(Placement {
        tag,
        x: coordinate(line_no, x)?,
        y: coordinate(line_no, y)?,
    })
}

fn coordinate(line_no: usize, value: &str) -> Result<i32, LevelError> {
    value.parse().map_err(|_| LevelError::BadCoordinate {
        line: line_no,
        value: value.to_string(),
    })
}

pub fn load_placements(path: &Path) -> Result<Vec<Placement>, LevelError> {
    let src = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let placements = parse_placements(&src)?;
    info!(path = %path.display(), records = placements.len(), "level file read");
    Ok(placements)
}
