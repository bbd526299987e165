use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, multispace0, multispace1, not_line_ending, space1};
use nom::combinator::{map_res, opt};
use nom::multi::many0;
use nom::sequence::{pair, preceded, terminated};

use crate::color::VertexId;
use crate::error::{ColoringError, Result};


/** reads an instance from file, returns (n, m, edges).
Edges are converted to 0-based vertex ids.
*/
pub fn read_from_file(filename:&str) -> Result<(usize, usize, Vec<(VertexId,VertexId)>)> {
    let content = fs::read_to_string(filename)?.replace("\r","");
    parse_dimacs(&content)
}

/// parses the content of a DIMACS file, returns (n, m, edges)
pub fn parse_dimacs(s:&str) -> Result<(usize, usize, Vec<(VertexId,VertexId)>)> {
    let (s,_) = skip_comments(s).map_err(|e| parse_error("comments", e))?;
    let (mut s,(n,m)) = read_header(s).map_err(|e| parse_error("header", e))?;
    let mut edges = Vec::with_capacity(m);
    loop {
        let (remaining,_) = skip_comments(s).map_err(|e| parse_error("comments", e))?;
        if remaining.is_empty() { break; }
        let (remaining,(a,b)) = read_edge(remaining).map_err(|e| parse_error("edge", e))?;
        // WARNING: indices start at 1 in the DIMACS format
        if a == 0 || b == 0 || a > n || b > n {
            return Err(ColoringError::Parse(
                format!("edge ({},{}) outside of vertex range 1..={}", a, b, n)
            ));
        }
        edges.push((a-1, b-1));
        s = remaining;
    }
    // some generators count each edge twice
    if edges.len() != m && 2*edges.len() != m {
        return Err(ColoringError::Parse(
            format!("header announces {} edges, {} found", m, edges.len())
        ));
    }
    Ok((n, m, edges))
}

fn parse_error(context:&str, e:nom::Err<nom::error::Error<&str>>) -> ColoringError {
    ColoringError::Parse(format!("invalid {}: {}", context, e))
}

/// reads an unsigned integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// skips a single comment
fn skip_comment(s:&str) -> IResult<&str, &str> {
    terminated(preceded(tag("c"), not_line_ending), opt(line_ending))(s)
}

/// skips all comments (and blank space between them)
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(alt((skip_comment, multispace1)))(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        pair(preceded(space1, integer), preceded(space1, integer)),
        multispace0
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e"), read_two_integers)(s)
}
