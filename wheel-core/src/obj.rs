/// OBJ subset codec: `v`, `vn` and triangular `f v//n` records
use std::fmt;
use std::io;

use log::{debug, warn};
use nalgebra::{Point3, Vector3};
use nom::{
    bytes::complete::{tag, take_till1},
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map, opt},
    number::complete::float,
    sequence::{preceded, separated_pair},
    IResult,
};

use crate::buffers::RenderBuffers;
use crate::error::{ObjError, RecordKind};
use crate::geometry::Mesh;

/// A face corner exactly as written in the file (1-based indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    pub vertex: usize,
    pub normal: usize,
}

/// One classified line of OBJ text
#[derive(Debug, Clone, PartialEq)]
pub enum ObjLine {
    Vertex(Point3<f32>),
    Normal(Vector3<f32>),
    Face([FaceVertex; 3]),
    /// Blank lines, comments and every record kind this codec does not handle
    Unrecognized,
}

/// Why a face line was dropped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FaceDefect {
    #[error("expected 3 corners, found {0} (only triangles are supported)")]
    CornerCount(usize),

    #[error("corner `{0}` is not in `vertex//normal` form")]
    BadCorner(String),
}

/// A line that matched a known keyword but could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDefect {
    MalformedRecord(RecordKind),
    MalformedFace(FaceDefect),
}

/// A skipped face, reported alongside the parse result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub line: usize,
    pub defect: FaceDefect,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: skipped face: {}", self.line, self.defect)
    }
}

/// Parser output: the flat buffers plus any faces that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedObj {
    buffers: RenderBuffers,
    warnings: Vec<ParseWarning>,
}

impl ParsedObj {
    pub fn buffers(&self) -> &RenderBuffers {
        &self.buffers
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn into_buffers(self) -> RenderBuffers {
        self.buffers
    }

    pub fn into_parts(self) -> (RenderBuffers, Vec<ParseWarning>) {
        (self.buffers, self.warnings)
    }
}

/// Classify a single line of OBJ text
pub fn classify_line(line: &str) -> Result<ObjLine, LineDefect> {
    let line = line.trim();
    let (args, keyword) = match parse_keyword(line) {
        Ok(result) => result,
        Err(_) => return Ok(ObjLine::Unrecognized),
    };

    match keyword {
        "v" => all_consuming(parse_vector3)(args)
            .map(|(_, (x, y, z))| ObjLine::Vertex(Point3::new(x, y, z)))
            .map_err(|_| LineDefect::MalformedRecord(RecordKind::Vertex)),
        "vn" => all_consuming(parse_vector3)(args)
            .map(|(_, (x, y, z))| ObjLine::Normal(Vector3::new(x, y, z)))
            .map_err(|_| LineDefect::MalformedRecord(RecordKind::Normal)),
        "f" => parse_face(args)
            .map(ObjLine::Face)
            .map_err(LineDefect::MalformedFace),
        _ => Ok(ObjLine::Unrecognized),
    }
}

fn parse_keyword(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace1(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    // Optional `w` weight, ignored
    let (input, _) = opt(preceded(multispace1, float))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (x, y, z)))
}

/// Digits too large for `usize` saturate, so bounds checking still rejects them
fn parse_index(input: &str) -> IResult<&str, usize> {
    map(digit1, |digits: &str| {
        digits.parse::<usize>().unwrap_or(usize::MAX)
    })(input)
}

fn parse_index_pair(input: &str) -> IResult<&str, (usize, usize)> {
    separated_pair(parse_index, tag("//"), parse_index)(input)
}

fn parse_face_vertex(token: &str) -> Result<FaceVertex, FaceDefect> {
    all_consuming(parse_index_pair)(token)
        .map(|(_, (vertex, normal))| FaceVertex { vertex, normal })
        .map_err(|_| FaceDefect::BadCorner(token.to_string()))
}

fn parse_face(args: &str) -> Result<[FaceVertex; 3], FaceDefect> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let [a, b, c] = tokens.as_slice() else {
        return Err(FaceDefect::CornerCount(tokens.len()));
    };

    Ok([
        parse_face_vertex(a)?,
        parse_face_vertex(b)?,
        parse_face_vertex(c)?,
    ])
}

/// Look up a 1-based index in a table declared so far
fn resolve<T: Copy>(table: &[T], index: usize, kind: RecordKind, line: usize) -> Result<T, ObjError> {
    index
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .ok_or(ObjError::IndexOutOfRange {
            line,
            kind,
            index,
            count: table.len(),
        })
}

/// Parse OBJ text into flat per-corner render buffers.
///
/// Faces that are not triangles in `v//n` form are skipped with a warning.
/// Malformed `v`/`vn` records and indices outside the tables declared so far
/// abort the parse.
pub fn parse_obj(text: &str) -> Result<ParsedObj, ObjError> {
    let mut positions: Vec<Point3<f32>> = Vec::new();
    let mut normals: Vec<Vector3<f32>> = Vec::new();
    let mut parsed = ParsedObj::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        match classify_line(line) {
            Ok(ObjLine::Vertex(position)) => positions.push(position),
            Ok(ObjLine::Normal(normal)) => normals.push(normal),
            Ok(ObjLine::Face(corners)) => {
                let mut resolved = [(Point3::origin(), Vector3::zeros()); 3];
                for (slot, corner) in resolved.iter_mut().zip(&corners) {
                    *slot = (
                        resolve(&positions, corner.vertex, RecordKind::Vertex, line_number)?,
                        resolve(&normals, corner.normal, RecordKind::Normal, line_number)?,
                    );
                }
                for (position, normal) in &resolved {
                    parsed.buffers.push_corner(position, normal);
                }
            }
            Ok(ObjLine::Unrecognized) => {}
            Err(LineDefect::MalformedRecord(kind)) => {
                return Err(ObjError::MalformedRecord {
                    line: line_number,
                    kind,
                    text: line.trim().to_string(),
                });
            }
            Err(LineDefect::MalformedFace(defect)) => {
                let warning = ParseWarning {
                    line: line_number,
                    defect,
                };
                warn!("{}", warning);
                parsed.warnings.push(warning);
            }
        }
    }

    debug!(
        "parsed OBJ: {} vertices, {} normals, {} triangles, {} skipped",
        positions.len(),
        normals.len(),
        parsed.buffers.triangle_count(),
        parsed.warnings.len()
    );

    Ok(parsed)
}

/// Formats a mesh as OBJ text: vertices, then normals, then 1-based faces
pub struct ObjDisplay<'a> {
    mesh: &'a Mesh,
}

impl<'a> ObjDisplay<'a> {
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }
}

impl fmt::Display for ObjDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.mesh.vertices() {
            writeln!(f, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in self.mesh.normals() {
            writeln!(f, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for face in self.mesh.faces() {
            let [a, b, c] = face.corners;
            writeln!(
                f,
                "f {}//{} {}//{} {}//{}",
                a.vertex + 1,
                a.normal + 1,
                b.vertex + 1,
                b.normal + 1,
                c.vertex + 1,
                c.normal + 1
            )?;
        }
        Ok(())
    }
}

pub fn to_obj_string(mesh: &Mesh) -> String {
    ObjDisplay::new(mesh).to_string()
}

pub fn write_obj<W: io::Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", ObjDisplay::new(mesh))
}
