/// Wavefront OBJ decoder (positions and faces only)
use nom::{
    bytes::complete::take_till1,
    character::complete::{digit1, multispace0, multispace1, space0},
    combinator::{all_consuming, map_res},
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::geometry::{Face, Geometry};
use crate::transform::Vec3;

/// Every vertex coordinate is multiplied by this on load
pub const OBJ_SCALE: f32 = 300.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObjError {
    #[error("line {line}: vertex needs three numeric components")]
    Vertex { line: usize },
}

/// Decode OBJ text into a [`Geometry`].
///
/// `v` lines become vertices scaled by [`OBJ_SCALE`] and `f` lines become
/// faces. Face tokens such as `3`, `3/1` or `3//2` contribute the 1-based
/// vertex index before the first `/`; anything non-numeric is dropped.
/// Comments, blank lines and every other statement are skipped.
pub fn decode(text: &str) -> Result<Geometry, ObjError> {
    let mut geometry = Geometry::default();

    for (n, line) in text.lines().enumerate() {
        let Ok((rest, keyword)) = parse_keyword(line) else {
            continue;
        };
        if keyword.starts_with('#') {
            continue;
        }

        match keyword {
            "v" => {
                let (_, (x, y, z)) =
                    parse_vector3(rest).map_err(|_| ObjError::Vertex { line: n + 1 })?;
                geometry.vertex.push(Vec3::new(x, y, z) * OBJ_SCALE);
            }
            "f" => geometry.tris.push(parse_face(rest)),
            _ => {}
        }
    }

    log::debug!(
        "decoded OBJ: {} vertices, {} faces",
        geometry.vertex.len(),
        geometry.tris.len()
    );
    Ok(geometry)
}

fn parse_keyword(input: &str) -> IResult<&str, &str> {
    preceded(space0, take_till1(|c: char| c.is_whitespace()))(input)
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (x, y, z)))
}

fn parse_face(input: &str) -> Face {
    input.split_whitespace().filter_map(face_index).collect()
}

/// 0-based index from a face token, `None` for anything unusable
fn face_index(token: &str) -> Option<usize> {
    let head = token.split('/').next()?;
    let (_, index) = parse_index(head).ok()?;
    index.checked_sub(1)
}

fn parse_index(input: &str) -> IResult<&str, usize> {
    all_consuming(map_res(digit1, str::parse::<usize>))(input)
}
