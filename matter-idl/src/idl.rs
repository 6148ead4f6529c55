//! Parser for the cluster subset of the Matter IDL.
//!
//! Only the constructs the code generator consumes are understood:
//! `cluster` blocks with `revision`, `enum`, `bitmap`, `struct`,
//! `attribute`, `command` and `event` members. Endpoint composition is
//! not part of this layer.

use miette::{Diagnostic, NamedSource, SourceSpan};
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case, take_until, take_while, take_while1},
    character::complete::{digit1, hex_digit1, multispace1, space1},
    combinator::{map, opt, recognize, value},
    error::ErrorKind,
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, tuple},
    IResult, Parser,
};
use nom_greedyerror::GreedyError;
use nom_locate::LocatedSpan;
use nom_supreme::ParserExt;
use thiserror::Error;
use tracing::warn;

use crate::{
    AccessPrivilege, ApiMaturity, Attribute, Bitmap, Cluster, Command, ConstantEntry, DataType,
    Enum, Event, EventPriority, Field, Struct, StructField, StructType,
};

// easier to type and not move str around
pub type Span<'a> = LocatedSpan<&'a str>;
type ParseError<'a> = GreedyError<Span<'a>, ErrorKind>;

/// Offset of the deepest position a failed parse reached, if any.
fn deepest_offset(error: &nom::Err<ParseError<'_>>) -> Option<usize> {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            e.errors.iter().map(|(p, _k)| p.location_offset()).max()
        }
        nom::Err::Incomplete(_) => None,
    }
}

/// A documentation comment (i.e. something between `/** ... */`).
///
/// Typically placed before some element (e.g. cluster or command) to serve
/// as documentation for it. Parsing whitespace yields the doc comment if
/// the last comment in a whitespace run is a doc comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocComment<'a>(pub &'a str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WhitespaceKind<'a> {
    DocComment(&'a str), // /** ... */
    BlockComment,        // /* ... */ (and NOT a doc comment)
    LineComment,         // // ...
    Blank,               // general newline/space/tab
}

/// Parses one whitespace run: spaces, a line comment or a block comment.
fn whitespace_group(span: Span) -> IResult<Span, WhitespaceKind<'_>, ParseError> {
    // NOTE: cases kept separate on purpose; an `alt` chain here measurably
    //       slows the parser down since whitespace runs between every token.

    if let Ok((span, _)) = preceded(tag::<_, _, ()>("//"), is_not("\n\r")).parse(span) {
        return Ok((span, WhitespaceKind::LineComment));
    }

    if let Ok((span, body)) =
        delimited(tag::<_, _, ()>("/*"), take_until("*/"), tag("*/")).parse(span)
    {
        return Ok((
            span,
            if body.starts_with('*') {
                WhitespaceKind::DocComment(&body.fragment()[1..])
            } else {
                WhitespaceKind::BlockComment
            },
        ));
    }

    multispace1.map(|_: Span| WhitespaceKind::Blank).parse(span)
}

/// Parses 0 or more whitespace groups. It can NEVER fail.
///
/// If the last comment in the run is a doc comment, it is returned.
///
/// Examples:
///
/// ```
/// use matter_idl::idl::{whitespace0, DocComment};
///
/// let result = whitespace0(" /*plain*/\n12 abc".into()).expect("valid");
/// assert_eq!(result.0.fragment().to_string(), "12 abc");
/// assert_eq!(result.1, None);
///
/// let result = whitespace0(" /**doc comment*/\n abc".into()).expect("valid");
/// assert_eq!(result.0.fragment().to_string(), "abc");
/// assert_eq!(result.1, Some(DocComment("doc comment")));
/// ```
pub fn whitespace0(span: Span) -> IResult<Span, Option<DocComment>, ParseError> {
    // early bail out: whitespace starts with a blank or a `/` comment
    match span.chars().next() {
        Some('\r' | '\n' | '\t' | ' ' | '/') => (),
        _ => return Ok((span, None)),
    }

    let (mut rest, mut doc) = match whitespace_group(span) {
        Err(_) => return Ok((span, None)),
        Ok((span, WhitespaceKind::DocComment(c))) => (span, Some(DocComment(c))),
        Ok((span, _)) => (span, None),
    };

    loop {
        match whitespace_group(rest) {
            Ok((span, kind)) => {
                rest = span;
                match kind {
                    WhitespaceKind::DocComment(c) => doc = Some(DocComment(c)),
                    WhitespaceKind::BlockComment | WhitespaceKind::LineComment => doc = None,
                    WhitespaceKind::Blank => {}
                }
            }
            Err(_) => return Ok((rest, doc)),
        }
    }
}

/// Parses at least one whitespace group, returning the trailing doc
/// comment if any.
pub fn whitespace1(span: Span) -> IResult<Span, Option<DocComment>, ParseError> {
    let parsed = whitespace0(span)?;

    if span == parsed.0 {
        // this WILL fail; used as such to surface a proper error
        space1::<_, ParseError>(span)?;
    }

    Ok(parsed)
}

/// A parser for the maturity prefix that CANNOT fail.
///
/// Consumes no input when no maturity is specified, in which case the
/// member is stable.
///
/// Examples:
///
/// ```
/// use matter_idl::ApiMaturity;
/// use matter_idl::idl::api_maturity;
///
/// assert_eq!(
///     api_maturity("123".into()),
///     Ok(("123".into(), ApiMaturity::Stable))
/// );
///
/// let result = api_maturity("provisional 123".into()).expect("valid");
/// assert_eq!(result.0.fragment().to_string(), " 123");
/// assert_eq!(result.1, ApiMaturity::Provisional);
/// ```
pub fn api_maturity(span: Span) -> IResult<Span, ApiMaturity, ParseError> {
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("stable").parse(span) {
        return Ok((span, ApiMaturity::Stable));
    }
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("provisional").parse(span) {
        return Ok((span, ApiMaturity::Provisional));
    }
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("internal").parse(span) {
        return Ok((span, ApiMaturity::Internal));
    }
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("deprecated").parse(span) {
        return Ok((span, ApiMaturity::Deprecated));
    }

    Ok((span, ApiMaturity::Stable))
}

/// Parses a hex-formatted integer.
///
/// Examples:
///
/// ```
/// use matter_idl::idl::hex_integer;
///
/// let result = hex_integer("0x5C rest".into()).expect("valid");
/// assert_eq!(result.0.fragment().to_string(), " rest");
/// assert_eq!(result.1, 0x5C);
/// ```
pub fn hex_integer(span: Span) -> IResult<Span, u64, ParseError> {
    hex_digit1::<Span, ParseError>
        .preceded_by(tag_no_case("0x"))
        .map(|r| u64::from_str_radix(r.fragment(), 16).expect("valid hex digits"))
        .parse(span)
}

/// Parses a decimal-formatted integer.
pub fn decimal_integer(span: Span) -> IResult<Span, u64, ParseError> {
    digit1::<Span, ParseError>
        .map(|s| s.fragment().parse::<u64>().expect("valid digits"))
        .parse(span)
}

/// Parses a positive integer (hex or decimal).
///
/// Examples:
///
/// ```
/// use matter_idl::idl::positive_integer;
///
/// let result = positive_integer("0x12abctest".into()).expect("valid");
/// assert_eq!(result.0.fragment().to_string(), "test");
/// assert_eq!(result.1, 0x12abc);
/// ```
pub fn positive_integer(span: Span) -> IResult<Span, u64, ParseError> {
    // NOTE: order matters so that 0x123 is a hex and not 0 followed by "x123"
    if let Ok(r) = hex_integer.parse(span) {
        return Ok(r);
    }
    decimal_integer.parse(span)
}

/// Parses a name id, of the form /[a-zA-Z_][a-zA-Z0-9_]*/
pub fn ident(span: Span) -> IResult<Span, &str, ParseError> {
    let valid_first = |c: char| c.is_ascii_alphabetic() || c == '_';
    let valid_rest = |c: char| c.is_ascii_alphanumeric() || c == '_';
    map(
        recognize(tuple((take_while1(valid_first), take_while(valid_rest)))),
        |data: Span| *data.fragment(),
    )(span)
}

/// Parses a whitespace-separated run of the given quality keywords.
///
/// Consumes nothing when the first token is not one of the keywords;
/// trailing whitespace after the last keyword is left alone.
fn quality_keywords<'a>(
    span: Span<'a>,
    keywords: &[&'static str],
) -> (Span<'a>, Vec<&'static str>) {
    let mut found: Vec<&'static str> = Vec::new();
    let mut rest = span;

    loop {
        let mut start = rest;
        if !found.is_empty() {
            match whitespace1.parse(start) {
                Ok((tail, _)) => start = tail,
                Err(_) => break,
            }
        }

        let mut matched = false;
        for keyword in keywords {
            if found.contains(keyword) {
                continue;
            }
            if let Ok((tail, _)) = tag_no_case::<_, _, ()>(*keyword).parse(start) {
                rest = tail;
                found.push(*keyword);
                matched = true;
                break;
            }
        }
        if !matched {
            break;
        }
    }

    (rest, found)
}

/// Parses one constant entry (an enum variant or a bitmap bit).
///
/// Consumes any whitespace BEFORE the entry.
///
/// Examples:
///
/// ```
/// use matter_idl::{ApiMaturity, ConstantEntry};
/// use matter_idl::idl::constant_entry;
///
/// let parsed = constant_entry("provisional kConstant = 0x123 ;".into()).expect("valid");
/// assert_eq!(parsed.0.fragment().to_string(), "");
/// assert_eq!(
///     parsed.1,
///     ConstantEntry {
///         id: "kConstant".into(),
///         code: 0x123,
///         maturity: ApiMaturity::Provisional
///     }
/// );
/// ```
pub fn constant_entry(span: Span) -> IResult<Span, ConstantEntry, ParseError> {
    tuple((
        whitespace0,
        api_maturity,
        whitespace0,
        ident,
        whitespace0,
        tag("="),
        whitespace0,
        positive_integer,
        whitespace0,
        tag(";"),
    ))
    .map(|(_, maturity, _, id, _, _, _, code, _, _)| ConstantEntry {
        maturity,
        id: id.into(),
        code,
    })
    .parse(span)
}

/// Parses a `{ ... }` block of constant entries.
fn constant_block(span: Span) -> IResult<Span, Vec<ConstantEntry>, ParseError> {
    delimited(
        tag("{"),
        tuple((many0(constant_entry), whitespace0)).map(|(entries, _)| entries),
        tag("}"),
    )
    .parse(span)
}

/// Parses `<keyword> Name : base_type { entries }`, the shared shape of
/// enum and bitmap definitions.
fn named_constant_block<'a>(
    keyword: &'static str,
    span: Span<'a>,
) -> IResult<Span<'a>, (String, String, Vec<ConstantEntry>), ParseError<'a>> {
    tuple((
        tag_no_case(keyword),
        whitespace1,
        ident,
        whitespace0,
        tag(":"),
        whitespace0,
        ident,
        whitespace0,
        constant_block,
    ))
    .map(|(_, _, id, _, _, _, base_type, _, entries)| (id.into(), base_type.into(), entries))
    .parse(span)
}

pub fn enumeration(span: Span) -> IResult<Span, Enum, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;

    enumeration_tail(comment.map(|DocComment(c)| c), maturity, span)
}

fn enumeration_tail<'a>(
    doc_comment: Option<&str>,
    maturity: ApiMaturity,
    span: Span<'a>,
) -> IResult<Span<'a>, Enum, ParseError<'a>> {
    named_constant_block("enum", span)
        .map(|(span, (id, base_type, entries))| {
            (
                span,
                Enum {
                    doc_comment: doc_comment.map(|c| c.into()),
                    maturity,
                    id,
                    base_type,
                    entries,
                },
            )
        })
}

pub fn bitmap(span: Span) -> IResult<Span, Bitmap, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;

    bitmap_tail(comment.map(|DocComment(c)| c), maturity, span)
}

fn bitmap_tail<'a>(
    doc_comment: Option<&str>,
    maturity: ApiMaturity,
    span: Span<'a>,
) -> IResult<Span<'a>, Bitmap, ParseError<'a>> {
    named_constant_block("bitmap", span)
        .map(|(span, (id, base_type, entries))| {
            (
                span,
                Bitmap {
                    doc_comment: doc_comment.map(|c| c.into()),
                    maturity,
                    id,
                    base_type,
                    entries,
                },
            )
        })
}

/// Parses `type_name[<max_len>] field_id[[]] = code`.
pub fn field(span: Span) -> IResult<Span, Field, ParseError> {
    tuple((
        whitespace0,
        ident,
        opt(tuple((
            whitespace0,
            tag("<"),
            whitespace0,
            positive_integer,
            whitespace0,
            tag(">"),
        ))
        .map(|(_, _, _, len, _, _)| len)),
        whitespace1,
        ident,
        whitespace0,
        opt(tuple((tag("["), whitespace0, tag("]"), whitespace0))),
        tag("="),
        whitespace0,
        positive_integer,
    ))
    .map(
        |(_, type_name, max_length, _, id, _, list_marker, _, _, code)| Field {
            data_type: DataType {
                name: type_name.into(),
                is_list: list_marker.is_some(),
                max_length,
            },
            id: id.into(),
            code,
        },
    )
    .parse(span)
}

pub fn struct_field(span: Span) -> IResult<Span, StructField, ParseError> {
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;
    let (span, qualities) = quality_keywords(span, &["optional", "nullable", "fabric_sensitive"]);

    let (span, field) = field(span)?;

    Ok((
        span,
        StructField {
            field,
            maturity,
            is_optional: qualities.contains(&"optional"),
            is_nullable: qualities.contains(&"nullable"),
            is_fabric_sensitive: qualities.contains(&"fabric_sensitive"),
        },
    ))
}

/// Parses a `{ field; field; ... }` block.
fn struct_fields(span: Span) -> IResult<Span, Vec<StructField>, ParseError> {
    delimited(
        tag("{"),
        many0(delimited(
            whitespace0,
            struct_field,
            tuple((whitespace0, tag(";"))),
        )),
        tuple((whitespace0, tag("}"))),
    )
    .parse(span)
}

pub fn struct_def(span: Span) -> IResult<Span, Struct, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;

    struct_def_tail(comment.map(|DocComment(c)| c), maturity, span)
}

fn struct_def_tail<'a>(
    doc_comment: Option<&str>,
    maturity: ApiMaturity,
    span: Span<'a>,
) -> IResult<Span<'a>, Struct, ParseError<'a>> {
    let (span, role) = opt(alt((tag_no_case("request"), tag_no_case("response"))))(span)?;
    let role = role.map(|r| *r.fragment());

    let (span, _) = whitespace0.parse(span)?;
    let (span, qualities) = quality_keywords(span, &["fabric_scoped"]);
    let is_fabric_scoped = qualities.contains(&"fabric_scoped");

    let (span, id) = delimited(
        tuple((whitespace0, tag_no_case("struct"), whitespace1)),
        ident,
        whitespace0,
    )
    .parse(span)?;

    let (span, struct_type) = match role {
        Some("request") => (span, StructType::Request),
        Some("response") => tuple((tag("="), whitespace0, positive_integer, whitespace0))
            .map(|(_, _, code, _)| StructType::Response(code))
            .parse(span)?,
        _ => (span, StructType::Regular),
    };

    let (span, fields) = struct_fields(span)?;

    Ok((
        span,
        Struct {
            doc_comment: doc_comment.map(|c| c.into()),
            maturity,
            struct_type,
            id: id.into(),
            fields,
            is_fabric_scoped,
        },
    ))
}

pub fn access_privilege(span: Span) -> IResult<Span, AccessPrivilege, ParseError> {
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("view").parse(span) {
        return Ok((span, AccessPrivilege::View));
    }
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("operate").parse(span) {
        return Ok((span, AccessPrivilege::Operate));
    }
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("manage").parse(span) {
        return Ok((span, AccessPrivilege::Manage));
    }

    value(AccessPrivilege::Administer, tag_no_case("administer")).parse(span)
}

/// Parses the optional `access(read: ..., write: ...)` clause of an
/// attribute. CANNOT fail: returns the spec defaults when absent.
fn attribute_access(span: Span) -> IResult<Span, (AccessPrivilege, AccessPrivilege), ParseError> {
    let (span, entries) = opt(delimited(
        tuple((
            whitespace0,
            tag_no_case("access"),
            whitespace0,
            tag("("),
            whitespace0,
        )),
        separated_list0(
            tuple((whitespace0, tag(","), whitespace0)),
            tuple((
                whitespace0,
                alt((tag_no_case("read"), tag_no_case("write"))),
                whitespace0,
                tag(":"),
                whitespace0,
                access_privilege,
                whitespace0,
            ))
            .map(|(_, key, _, _, _, privilege, _)| (*key.fragment(), privilege)),
        ),
        tuple((whitespace0, tag(")"))),
    ))
    .parse(span)?;

    let mut read_acl = AccessPrivilege::View;
    let mut write_acl = AccessPrivilege::Operate;

    for (key, privilege) in entries.into_iter().flatten() {
        if key.eq_ignore_ascii_case("read") {
            read_acl = privilege;
        } else {
            write_acl = privilege;
        }
    }

    Ok((span, (read_acl, write_acl)))
}

pub fn attribute(span: Span) -> IResult<Span, Attribute, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;

    attribute_tail(comment.map(|DocComment(c)| c), maturity, span)
}

fn attribute_tail<'a>(
    doc_comment: Option<&str>,
    maturity: ApiMaturity,
    span: Span<'a>,
) -> IResult<Span<'a>, Attribute, ParseError<'a>> {
    let (span, qualities) = quality_keywords(span, &["readonly", "nosubscribe", "timedwrite"]);

    tuple((
        whitespace0,
        tag_no_case("attribute"),
        whitespace1,
        attribute_access,
        whitespace0,
        struct_field,
        whitespace0,
        tag(";"),
    ))
    .map(
        |(_, _, _, (read_acl, write_acl), _, field, _, _)| Attribute {
            doc_comment: doc_comment.map(|c| c.into()),
            maturity,
            field,
            read_acl,
            write_acl,
            is_read_only: qualities.contains(&"readonly"),
            is_no_subscribe: qualities.contains(&"nosubscribe"),
            is_timed_write: qualities.contains(&"timedwrite"),
        },
    )
    .parse(span)
}

pub fn command(span: Span) -> IResult<Span, Command, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;

    command_tail(comment.map(|DocComment(c)| c), maturity, span)
}

fn command_tail<'a>(
    doc_comment: Option<&str>,
    maturity: ApiMaturity,
    span: Span<'a>,
) -> IResult<Span<'a>, Command, ParseError<'a>> {
    let (span, qualities) = quality_keywords(span, &["timed", "fabric"]);

    let access = opt(tuple((
        tuple((
            whitespace0,
            tag_no_case("access"),
            whitespace0,
            tag("("),
            whitespace0,
            tag_no_case("invoke"),
            tag(":"),
            whitespace0,
        )),
        access_privilege,
        tuple((whitespace0, tag(")"))),
    ))
    .map(|(_, privilege, _)| privilege))
    .map(|access| access.unwrap_or(AccessPrivilege::Operate));

    tuple((
        tuple((whitespace0, tag_no_case("command"))),
        access,
        whitespace0,
        ident,
        tuple((whitespace0, tag("("), whitespace0)),
        opt(ident),
        tuple((whitespace0, tag(")"), whitespace0, tag(":"), whitespace0)),
        ident,
        tuple((whitespace0, tag("="), whitespace0)),
        positive_integer,
        tuple((whitespace0, tag(";"))),
    ))
    .map(
        |(_, access, _, id, _, input, _, output, _, code, _)| Command {
            doc_comment: doc_comment.map(|c| c.into()),
            maturity,
            access,
            id: id.into(),
            input: input.map(|i| i.into()),
            output: output.into(),
            code,
            is_timed: qualities.contains(&"timed"),
            is_fabric_scoped: qualities.contains(&"fabric"),
        },
    )
    .parse(span)
}

pub fn event_priority(span: Span) -> IResult<Span, EventPriority, ParseError> {
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("info").parse(span) {
        return Ok((span, EventPriority::Info));
    }
    if let Ok((span, _)) = tag_no_case::<_, _, ()>("critical").parse(span) {
        return Ok((span, EventPriority::Critical));
    }

    value(EventPriority::Debug, tag_no_case("debug")).parse(span)
}

pub fn event(span: Span) -> IResult<Span, Event, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let (span, maturity) = delimited(whitespace0, api_maturity, whitespace0).parse(span)?;

    event_tail(comment.map(|DocComment(c)| c), maturity, span)
}

fn event_tail<'a>(
    doc_comment: Option<&str>,
    maturity: ApiMaturity,
    span: Span<'a>,
) -> IResult<Span<'a>, Event, ParseError<'a>> {
    let (span, qualities) = quality_keywords(span, &["fabric_sensitive"]);

    tuple((
        preceded(whitespace0, event_priority),
        whitespace1,
        tag_no_case("event"),
        whitespace1,
        opt(delimited(
            tuple((
                tag_no_case("access"),
                whitespace0,
                tag("("),
                whitespace0,
                tag_no_case("read"),
                tag(":"),
                whitespace0,
            )),
            access_privilege,
            tuple((whitespace0, tag(")"))),
        ))
        .map(|access| access.unwrap_or(AccessPrivilege::View)),
        preceded(whitespace0, ident),
        preceded(tuple((whitespace0, tag("="), whitespace0)), positive_integer),
        preceded(whitespace0, struct_fields),
    ))
    .map(|(priority, _, _, _, access, id, code, fields)| Event {
        doc_comment: doc_comment.map(|c| c.into()),
        maturity,
        priority,
        access,
        id: id.into(),
        code,
        fields,
        is_fabric_sensitive: qualities.contains(&"fabric_sensitive"),
    })
    .parse(span)
}

/// Parses one cluster member and pushes it onto the cluster.
fn cluster_member<'a>(cluster: &mut Cluster, span: Span<'a>) -> Option<Span<'a>> {
    let (span, (comment, maturity, _)) = tuple((
        whitespace0.map(|c| c.map(|DocComment(c)| c)),
        api_maturity,
        whitespace0,
    ))
    .parse(span)
    .ok()?;

    if let Ok((rest, revision)) = delimited(
        tuple((tag_no_case("revision"), whitespace1)),
        positive_integer,
        tuple((whitespace0, tag(";"))),
    )
    .parse(span)
    {
        cluster.revision = revision;
        return Some(rest);
    }

    if let Ok((rest, b)) = bitmap_tail(comment, maturity, span) {
        cluster.bitmaps.push(b);
        return Some(rest);
    }
    if let Ok((rest, e)) = enumeration_tail(comment, maturity, span) {
        cluster.enums.push(e);
        return Some(rest);
    }
    if let Ok((rest, s)) = struct_def_tail(comment, maturity, span) {
        cluster.structs.push(s);
        return Some(rest);
    }
    if let Ok((rest, a)) = attribute_tail(comment, maturity, span) {
        cluster.attributes.push(a);
        return Some(rest);
    }
    if let Ok((rest, c)) = command_tail(comment, maturity, span) {
        cluster.commands.push(c);
        return Some(rest);
    }
    if let Ok((rest, e)) = event_tail(comment, maturity, span) {
        cluster.events.push(e);
        return Some(rest);
    }
    None
}

pub fn cluster(span: Span) -> IResult<Span, Cluster, ParseError> {
    let (span, comment) = whitespace0.parse(span)?;
    let doc_comment = comment.map(|DocComment(c)| c);

    let (span, maturity) = tuple((api_maturity, whitespace0))
        .map(|(m, _)| m)
        .parse(span)?;

    let (span, mut cluster) = delimited(
        tuple((
            opt(tuple((
                alt((tag_no_case("client"), tag_no_case("server"))),
                whitespace1,
            ))),
            tag_no_case("cluster"),
            whitespace1,
        )),
        tuple((ident, whitespace0, tag("="), whitespace0, positive_integer)),
        whitespace0,
    )
    .map(|(id, _, _, _, code)| Cluster {
        doc_comment: doc_comment.map(|c| c.into()),
        maturity,
        id: id.into(),
        code,
        ..Default::default()
    })
    .parse(span)?;

    let (mut span, _) = tag("{").parse(span)?;
    while let Some(rest) = cluster_member(&mut cluster, span) {
        span = rest;
    }

    value(cluster, tuple((whitespace0, tag("}")))).parse(span)
}

/// A parsed IDL document: the clusters it defines.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub struct Idl {
    pub clusters: Vec<Cluster>,
}

/// Error raised when IDL parsing fails.
#[derive(Error, Debug, Diagnostic)]
#[error("Failed to parse IDL.")]
#[diagnostic(
    code("matter::idl::parse::failure"),
    help("Check the IDL format near the reported location.")
)]
pub struct IdlParseError {
    #[source_code]
    pub src: NamedSource,

    #[label("Parse error location")]
    pub error_location: SourceSpan,
}

impl IdlParseError {
    fn from<'a>(input: Span<'a>, span: Span<'a>, error: nom::Err<ParseError<'a>>) -> Self {
        let pos = match deepest_offset(&error) {
            None => input.len() - span.len(),
            Some(pos) => pos,
        };

        warn!("IDL parse error: {:?}", error);

        IdlParseError {
            src: NamedSource::new("input idl", input.fragment().to_string()),
            error_location: (pos, 1).into(),
        }
    }
}

impl Idl {
    pub fn parse(input: Span) -> Result<Idl, IdlParseError> {
        let mut idl = Idl::default();

        let mut span = input;
        while !span.is_empty() {
            let (rest, parsed) = alt((cluster.map(Some), value(None, whitespace1)))
                .parse(span)
                .map_err(|e| IdlParseError::from(input, span, e))?;

            if let Some(c) = parsed {
                idl.clusters.push(c);
            }
            span = rest;
        }

        Ok(idl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_parse_ok<R: PartialEq + std::fmt::Debug>(
        parsed: IResult<Span, R, ParseError>,
        expected: R,
    ) {
        let actual = parsed.expect("parse should have succeeded").1;
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case("stable abc", ApiMaturity::Stable, " abc")]
    #[case("provisional abc", ApiMaturity::Provisional, " abc")]
    #[case("internal xyz", ApiMaturity::Internal, " xyz")]
    #[case("deprecated foo", ApiMaturity::Deprecated, " foo")]
    #[case("unrelated", ApiMaturity::Stable, "unrelated")]
    fn parse_api_maturity(
        #[case] input: &str,
        #[case] expected: ApiMaturity,
        #[case] rest: &str,
    ) {
        let result = api_maturity(input.into()).expect("valid");
        assert_eq!(result.1, expected);
        assert_eq!(result.0.fragment().to_string(), rest);
    }

    #[rstest]
    #[case("12 abc", 12)]
    #[case("0x12 abc", 0x12)]
    #[case("0X1F tail", 0x1F)]
    #[case("92;", 92)]
    fn parse_positive_integer(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(positive_integer(input.into()).expect("valid").1, expected);
    }

    #[test]
    fn parse_enumeration() {
        assert_parse_ok(
            enumeration(
                "
                enum EndOfServiceEnum : enum8 {
                    kNormal = 0;
                    kExpired = 1;
                }"
                .into(),
            ),
            Enum {
                doc_comment: None,
                maturity: ApiMaturity::Stable,
                id: "EndOfServiceEnum".into(),
                base_type: "enum8".into(),
                entries: vec![
                    ConstantEntry {
                        maturity: ApiMaturity::Stable,
                        id: "kNormal".into(),
                        code: 0,
                    },
                    ConstantEntry {
                        maturity: ApiMaturity::Stable,
                        id: "kExpired".into(),
                        code: 1,
                    },
                ],
            },
        );
    }

    #[test]
    fn parse_bitmap() {
        assert_parse_ok(
            bitmap(
                "/** Alarm features */ bitmap Feature : bitmap32 {
                    kSmokeAlarm = 0x1;
                    kCoAlarm = 0x2;
                }"
                .into(),
            ),
            Bitmap {
                doc_comment: Some(" Alarm features ".into()),
                maturity: ApiMaturity::Stable,
                id: "Feature".into(),
                base_type: "bitmap32".into(),
                entries: vec![
                    ConstantEntry {
                        maturity: ApiMaturity::Stable,
                        id: "kSmokeAlarm".into(),
                        code: 1,
                    },
                    ConstantEntry {
                        maturity: ApiMaturity::Stable,
                        id: "kCoAlarm".into(),
                        code: 2,
                    },
                ],
            },
        );
    }

    #[test]
    fn parse_attribute_with_access() {
        assert_parse_ok(
            attribute(
                "attribute access(write: manage) optional SensitivityEnum smokeSensitivityLevel = 0xB;"
                    .into(),
            ),
            Attribute {
                doc_comment: None,
                maturity: ApiMaturity::Stable,
                field: StructField {
                    field: Field {
                        data_type: DataType::scalar("SensitivityEnum"),
                        id: "smokeSensitivityLevel".into(),
                        code: 0xB,
                    },
                    maturity: ApiMaturity::Stable,
                    is_optional: true,
                    is_nullable: false,
                    is_fabric_sensitive: false,
                },
                read_acl: AccessPrivilege::View,
                write_acl: AccessPrivilege::Manage,
                is_read_only: false,
                is_no_subscribe: false,
                is_timed_write: false,
            },
        );
    }

    #[test]
    fn parse_list_attribute() {
        assert_parse_ok(
            attribute("readonly attribute attrib_id attributeList[] = 65531;".into()),
            Attribute {
                field: StructField {
                    field: Field {
                        data_type: DataType::list_of("attrib_id"),
                        id: "attributeList".into(),
                        code: 65531,
                    },
                    ..Default::default()
                },
                read_acl: AccessPrivilege::View,
                write_acl: AccessPrivilege::Operate,
                is_read_only: true,
                ..Default::default()
            },
        );
    }

    #[test]
    fn parse_command_with_input() {
        assert_parse_ok(
            command(
                "/** Turn off with a fade. */ command OffWithEffect(OffWithEffectRequest): DefaultSuccess = 64;"
                    .into(),
            ),
            Command {
                doc_comment: Some(" Turn off with a fade. ".into()),
                maturity: ApiMaturity::Stable,
                access: AccessPrivilege::Operate,
                id: "OffWithEffect".into(),
                input: Some("OffWithEffectRequest".into()),
                output: "DefaultSuccess".into(),
                code: 64,
                is_timed: false,
                is_fabric_scoped: false,
            },
        );
    }

    #[test]
    fn parse_event() {
        assert_parse_ok(
            event(
                "critical event SmokeAlarm = 0 {
                    AlarmStateEnum alarmSeverityLevel = 0;
                }"
                .into(),
            ),
            Event {
                doc_comment: None,
                maturity: ApiMaturity::Stable,
                priority: EventPriority::Critical,
                access: AccessPrivilege::View,
                id: "SmokeAlarm".into(),
                code: 0,
                fields: vec![StructField {
                    field: Field {
                        data_type: DataType::scalar("AlarmStateEnum"),
                        id: "alarmSeverityLevel".into(),
                        code: 0,
                    },
                    ..Default::default()
                }],
                is_fabric_sensitive: false,
            },
        );
    }

    #[test]
    fn parse_full_cluster() {
        assert_parse_ok(
            cluster(
                "
          /** Standalone alarm capability. */
          cluster BooleanState = 0x45 {
             revision 1;

             info event StateChange = 0 {
               boolean stateValue = 0;
             }

             readonly attribute boolean stateValue = 0;
             readonly attribute int16u clusterRevision = 65533;
          }
        "
                .into(),
            ),
            Cluster {
                doc_comment: Some(" Standalone alarm capability. ".into()),
                maturity: ApiMaturity::Stable,
                id: "BooleanState".into(),
                code: 0x45,
                revision: 1,
                attributes: vec![
                    Attribute {
                        field: StructField {
                            field: Field {
                                data_type: DataType::scalar("boolean"),
                                id: "stateValue".into(),
                                code: 0,
                            },
                            ..Default::default()
                        },
                        read_acl: AccessPrivilege::View,
                        write_acl: AccessPrivilege::Operate,
                        is_read_only: true,
                        ..Default::default()
                    },
                    Attribute {
                        field: StructField {
                            field: Field {
                                data_type: DataType::scalar("int16u"),
                                id: "clusterRevision".into(),
                                code: 65533,
                            },
                            ..Default::default()
                        },
                        read_acl: AccessPrivilege::View,
                        write_acl: AccessPrivilege::Operate,
                        is_read_only: true,
                        ..Default::default()
                    },
                ],
                events: vec![Event {
                    doc_comment: None,
                    maturity: ApiMaturity::Stable,
                    priority: EventPriority::Info,
                    access: AccessPrivilege::View,
                    id: "StateChange".into(),
                    code: 0,
                    fields: vec![StructField {
                        field: Field {
                            data_type: DataType::scalar("boolean"),
                            id: "stateValue".into(),
                            code: 0,
                        },
                        ..Default::default()
                    }],
                    is_fabric_sensitive: false,
                }],
                ..Default::default()
            },
        );
    }

    #[test]
    fn parse_idl_error() {
        assert!(Idl::parse("/* Invalid IDL */ cluster X = 1 { invalid }".into()).is_err());
    }

    #[test]
    fn parse_sample_clusters() {
        let idl = Idl::parse(crate::SAMPLE_CLUSTERS_IDL.into()).expect("sample IDL parses");

        let names: Vec<&str> = idl.clusters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            names,
            ["OnOff", "LevelControl", "BooleanState", "SmokeCoAlarm"]
        );

        let smoke = idl.clusters.last().expect("cluster");
        assert_eq!(smoke.code, 0x5C);
        assert_eq!(smoke.revision, 1);
        assert_eq!(smoke.enums.len(), 6);
        assert_eq!(smoke.events.len(), 11);
        assert!(smoke.attribute("smokeState").is_some());
    }
}
