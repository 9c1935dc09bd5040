// src/application/ext.rs
use crate::domain::{DomainError, ErrorKind, Outcome};
use std::fmt::Display;
use std::future::Future;

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn null_message<T>(message: Option<&str>) -> String {
    message.map_or_else(|| format!("{} is null", short_type_name::<T>()), str::to_owned)
}

fn null_with_inputs<T, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = inputs
        .into_iter()
        .map(|input| ToString::to_string(&input))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} is null, inputs: {joined}", short_type_name::<T>())
}

pub trait OptionExt<T> {
    /// Turn an absent value into a `NotFound` failure. Without a message the
    /// failure reads "<TypeName> is null".
    fn or_not_found(self, message: Option<&str>) -> Outcome<T>;

    /// Turn an absent value into an `Unclassified` failure (500) whose
    /// message lists the lookup inputs.
    fn or_unclassified_with<I>(self, inputs: I) -> Outcome<T>
    where
        I: IntoIterator,
        I::Item: Display;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, message: Option<&str>) -> Outcome<T> {
        match self {
            Some(value) => Outcome::succeed(value),
            None => Outcome::fail(DomainError::not_found(null_message::<T>(message))),
        }
    }

    fn or_unclassified_with<I>(self, inputs: I) -> Outcome<T>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        match self {
            Some(value) => Outcome::succeed(value),
            None => Outcome::fail(DomainError::new(
                ErrorKind::Unclassified,
                null_with_inputs::<T, I>(inputs),
            )),
        }
    }
}

/// Await a lookup and require that it produced something.
pub trait RequireExt<T>: Future<Output = Option<T>> + Sized {
    fn require(self, message: Option<&str>) -> impl Future<Output = Outcome<T>> {
        let message = message.map(str::to_owned);
        async move { self.await.or_not_found(message.as_deref()) }
    }

    /// Like [`OptionExt::or_unclassified_with`] after awaiting.
    fn require_with_inputs<I>(self, inputs: I) -> impl Future<Output = Outcome<T>>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let message = null_with_inputs::<T, I>(inputs);
        async move {
            match self.await {
                Some(value) => Outcome::succeed(value),
                None => Outcome::fail(DomainError::new(ErrorKind::Unclassified, message)),
            }
        }
    }
}

impl<T, F> RequireExt<T> for F where F: Future<Output = Option<T>> {}
