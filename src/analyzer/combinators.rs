//! # Parser Combinators
//!
//! Small parsers over token slices and the combinators that compose them.
//!
//! ## Combinator Types
//!
//! * **Basic Combinators**: `Equal`, `Satisfy`
//! * **Sequential Combinators**: `Tuple2`, `Delimited`
//! * **Optional Combinators**: `Optional`
//! * **Transformation Combinators**: `Map`, `AsUnit`
//! * **Error Handling Combinators**: `WithContext`

use super::core::ParseError;
use super::core::ParseResult;
use super::core::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Equal: Matches a specific value in the input
///
/// Consumes one token on success.
#[derive(Clone)]
pub struct Equal<I> {
    value: I,
}

impl<I> Equal<I> {
    pub fn new(value: I) -> Self {
        Self { value }
    }
}

impl<I: Clone + PartialEq + fmt::Display> Parser<I, I> for Equal<I> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<I> {
        match input.get(pos) {
            Some(found) if *found == self.value => Ok((pos + 1, found.clone())),
            Some(found) => Err(ParseError::UnexpectedToken {
                expected: self.value.to_string(),
                found: found.to_string(),
                position: pos,
                context: None,
            }),
            None => Err(ParseError::UnexpectedEOF {
                expected: self.value.to_string(),
                position: pos,
                context: None,
            }),
        }
    }
}

/// Satisfy: Consumes one token when the predicate maps it to a value
///
/// `expected` describes the admissible tokens for error messages.
#[derive(Clone)]
pub struct Satisfy<I, O, F> {
    expected: String,
    f: F,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O, F> Satisfy<I, O, F> {
    pub fn new(expected: &str, f: F) -> Self {
        Self {
            expected: expected.to_string(),
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, F> Parser<I, O> for Satisfy<I, O, F>
where
    I: fmt::Display,
    F: Fn(&I) -> Option<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        match input.get(pos) {
            Some(found) => match (self.f)(found) {
                Some(result) => Ok((pos + 1, result)),
                None => Err(ParseError::UnexpectedToken {
                    expected: self.expected.clone(),
                    found: found.to_string(),
                    position: pos,
                    context: None,
                }),
            },
            None => Err(ParseError::UnexpectedEOF {
                expected: self.expected.clone(),
                position: pos,
                context: None,
            }),
        }
    }
}

#[derive(Clone)]
pub struct Map<P, F, A, B> {
    parser: P,
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, A, B, P, F> Parser<I, B> for Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<B> {
        self.parser
            .parse(input, pos)
            .map(|(pos, value)| (pos, (self.f)(value)))
    }
}

// AsUnit: discards the parsed value
#[derive(Clone)]
pub struct AsUnit<P, O> {
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> AsUnit<P, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, ()> for AsUnit<P, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<()> {
        self.parser.parse(input, pos).map(|(pos, _)| (pos, ()))
    }
}

/// Optional: Succeeds with `None` without consuming input when the inner parser fails
///
/// Only wrap parsers that fail before consuming anything meaningful, such as a
/// single-token lookahead; errors of the inner parser are discarded.
#[derive(Clone)]
pub struct Optional<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Optional<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Option<O>> for Optional<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Option<O>> {
        match self.parser.parse(input, pos) {
            Ok((new_pos, value)) => Ok((new_pos, Some(value))),
            Err(_) => Ok((pos, None)),
        }
    }
}

#[derive(Clone)]
pub struct Tuple2<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Tuple2<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, (O1, O2)> for Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        Ok((pos, (result1, result2)))
    }
}

#[derive(Clone)]
pub struct Delimited<L, P, R, I, O> {
    left: L,
    parser: P,
    right: R,
    _phantom: PhantomData<(I, O)>,
}

impl<L, P, R, I, O> Delimited<L, P, R, I, O> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, L, P, R> Parser<I, O> for Delimited<L, P, R, I, O>
where
    L: Parser<I, ()>,
    P: Parser<I, O>,
    R: Parser<I, ()>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let (pos, _) = self.left.parse(input, pos)?;
        let (pos, value) = self.parser.parse(input, pos)?;
        let (pos, _) = self.right.parse(input, pos)?;
        Ok((pos, value))
    }
}

#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<I, O, P, C: ToString> Parser<I, O> for WithContext<P, C>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.parser
            .parse(input, pos)
            .map_err(|e| e.with_context(&self.context.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even() -> Satisfy<i32, i32, impl Fn(&i32) -> Option<i32>> {
        Satisfy::new("even number", |x: &i32| (x % 2 == 0).then_some(*x))
    }

    #[test]
    fn test_equal() {
        let input = vec![1, 2, 3];
        assert_eq!(Equal::new(2).parse(&input, 1), Ok((2, 2)));
        assert_eq!(
            Equal::new(2).parse(&input, 0),
            Err(ParseError::UnexpectedToken {
                expected: "2".to_string(),
                found: "1".to_string(),
                position: 0,
                context: None,
            })
        );
        assert!(matches!(
            Equal::new(2).parse(&input, 3),
            Err(ParseError::UnexpectedEOF { position: 3, .. })
        ));
    }

    #[test]
    fn test_satisfy() {
        let input = vec![2, 3];
        assert_eq!(even().parse(&input, 0), Ok((1, 2)));
        assert!(matches!(
            even().parse(&input, 1),
            Err(ParseError::UnexpectedToken { ref expected, .. }) if expected == "even number"
        ));
    }

    #[test]
    fn test_optional_does_not_consume_on_failure() {
        let input = vec![3];
        assert_eq!(Optional::new(even()).parse(&input, 0), Ok((0, None)));
        let input = vec![4];
        assert_eq!(Optional::new(even()).parse(&input, 0), Ok((1, Some(4))));
    }

    #[test]
    fn test_tuple_and_map() {
        let input = vec![2, 4, 5];
        let parser = Map::new(Tuple2::new(even(), even()), |(a, b): (i32, i32)| a + b);
        assert_eq!(parser.parse(&input, 0), Ok((2, 6)));
        assert!(parser.parse(&input, 1).is_err());
    }

    #[test]
    fn test_delimited() {
        let input = vec![0, 8, 1];
        let parser = Delimited::new(
            AsUnit::new(Equal::new(0)),
            even(),
            AsUnit::new(Equal::new(1)),
        );
        assert_eq!(parser.parse(&input, 0), Ok((3, 8)));

        let input = vec![0, 8, 0];
        assert!(matches!(
            parser.parse(&input, 0),
            Err(ParseError::UnexpectedToken { position: 2, .. })
        ));
    }

    #[test]
    fn test_with_context() {
        let input = vec![1];
        let parser = WithContext::new(even(), "number");
        match parser.parse(&input, 0) {
            Err(ParseError::UnexpectedToken { context, .. }) => {
                assert_eq!(context.as_deref(), Some("number"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
