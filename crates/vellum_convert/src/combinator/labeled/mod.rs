//! Descriptive labels on grammar terms.

use vellum_source::Source;

use crate::Converter;

/// A converter tagged with human-readable labels, such as which alternative
/// of a value grammar it stands for.
///
/// Labels are documentation only: conversion delegates unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Labeled<C> {
    inner: C,
    labels: &'static [&'static str],
}

impl<C> Labeled<C> {
    pub fn new(inner: C, labels: &'static [&'static str]) -> Self {
        Labeled { inner, labels }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Converter> Converter for Labeled<C> {
    type Output = C::Output;

    #[inline]
    fn attempt(&self, source: &mut Source<'_>) -> Option<C::Output> {
        self.inner.attempt(source)
    }
}
