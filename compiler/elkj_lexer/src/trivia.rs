//! Trivia filtering.
//!
//! Whitespace and comments stay in the [`TokenList`](crate::TokenList) so
//! the stream reproduces the source. A parser reads through
//! [`Significant`], which hides them.

use std::iter::FusedIterator;

use crate::Token;

/// Iterator adaptor that drops whitespace and comment tokens.
#[derive(Clone, Debug)]
#[must_use = "iterator adaptors are lazy"]
pub struct Significant<I> {
    inner: I,
}

impl<I> Significant<I> {
    pub fn new(inner: I) -> Self {
        Significant { inner }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<'src, I> Iterator for Significant<I>
where
    I: Iterator<Item = Token<'src>>,
{
    type Item = Token<'src>;

    #[inline]
    fn next(&mut self) -> Option<Token<'src>> {
        self.inner.find(|t| !t.is_trivia())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'src, I> DoubleEndedIterator for Significant<I>
where
    I: DoubleEndedIterator<Item = Token<'src>>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Token<'src>> {
        self.inner.rfind(|t| !t.is_trivia())
    }
}

impl<'src, I> FusedIterator for Significant<I> where I: FusedIterator<Item = Token<'src>> {}
