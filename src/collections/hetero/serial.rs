use std::fmt::{self, Display, Formatter};
use std::io::{self, Read, Write};
use std::str::{FromStr, SplitAsciiWhitespace};

use super::{Backend, HeteroContainer, InvalidToken, ReadError, UnexpectedEnd};
use crate::collections::traits::{Container, Kind};

/// The descriptive line closing every written container. Readers stop before it, so it carries no
/// data.
pub const LEGEND: &str = "Where the first number in each line is as follows: 0 - STACK, 1 - QUEUE, \
    2 - LINKED_LIST, 3 - BIN_SEARCH_TREE. The second number in each line is the amount of \
    elements in the current subContainer.";

/// Writes the text form: the backend count on the first line, then one line per backend holding
/// its kind tag, its length and its elements in serialization order, then [`LEGEND`].
impl<T: Display> Display for HeteroContainer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.container_count())?;

        for backend in &self.backends {
            write!(f, "{} {} ", backend.kind().tag(), backend.len())?;
            for value in backend.serial_iter() {
                write!(f, "{value} ")?;
            }
            writeln!(f)?;
        }

        write!(f, "{LEGEND}")
    }
}

impl<T: Display> HeteroContainer<T> {
    /// Writes the container's text form to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        log::debug!("wrote {} backends holding {} elements", self.container_count(), self.len());
        Ok(())
    }
}

impl<T: Ord + FromStr> HeteroContainer<T> {
    /// Reads a container from its text form.
    pub fn read_from<R: Read>(mut reader: R) -> Result<HeteroContainer<T>, ReadError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        input.parse()
    }

    /// Replaces this container with one read from `reader`. On failure, `self` is left untouched.
    pub fn load_from<R: Read>(&mut self, reader: R) -> Result<(), ReadError> {
        *self = HeteroContainer::read_from(reader)?;
        Ok(())
    }
}

impl<T: Ord + FromStr> FromStr for HeteroContainer<T> {
    type Err = ReadError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(input);
        let count: usize = tokens.parse_next("a backend count")?;
        let mut container = HeteroContainer::new();

        for _ in 0..count {
            let kind = Kind::from_tag(tokens.parse_next("a kind tag")?)?;
            let len: usize = tokens.parse_next("an element count")?;
            let mut backend = Backend::new(kind);

            for _ in 0..len {
                backend.push(tokens.parse_next("an element")?);
            }

            container.backends.push(backend);
        }

        log::debug!("read {count} backends holding {} elements", container.len());
        Ok(container)
    }
}

/// Whitespace separated tokens, counted so errors can report where they happened.
struct Tokens<'s> {
    inner: SplitAsciiWhitespace<'s>,
    position: usize,
}

impl<'s> Tokens<'s> {
    fn new(input: &'s str) -> Tokens<'s> {
        Tokens {
            inner: input.split_ascii_whitespace(),
            position: 0,
        }
    }

    fn parse_next<V: FromStr>(&mut self, expected: &'static str) -> Result<V, ReadError> {
        let token = self.inner.next().ok_or(UnexpectedEnd { expected })?;
        let position = self.position;
        self.position += 1;

        token.parse().map_err(|_| {
            InvalidToken {
                token: token.to_owned(),
                position,
                expected,
            }
            .into()
        })
    }
}
