use problem_kit::{DomainError, ErrorKind, NamingConvention, Outcome, ProblemProjector};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![
        Just(ErrorKind::NotFound),
        Just(ErrorKind::Invalid),
        Just(ErrorKind::Conflict),
        Just(ErrorKind::Unauthorized),
        Just(ErrorKind::Forbidden),
        Just(ErrorKind::InternalServerError),
    ]
}

fn convention_strategy() -> impl Strategy<Value = NamingConvention> {
    prop_oneof![
        Just(NamingConvention::CamelCase),
        Just(NamingConvention::PascalCase),
        Just(NamingConvention::SnakeCase),
        Just(NamingConvention::KebabCase),
        Just(NamingConvention::Preserve),
    ]
}

proptest! {
    #[test]
    fn success_returns_value_over_default(v in any::<i64>(), d in any::<i64>()) {
        let outcome = Outcome::succeed(v);
        prop_assert!(outcome.is_success());
        prop_assert_eq!(outcome.unwrap_or(d), v);
    }

    #[test]
    fn failure_returns_default(kind in kind_strategy(), msg in ".*", d in any::<i64>()) {
        let outcome: Outcome<i64> = Outcome::fail(DomainError::new(kind, msg));
        prop_assert!(outcome.is_failure());
        prop_assert_eq!(outcome.unwrap_or(d), d);
    }

    #[test]
    fn throw_if_failure_preserves_kind_and_message(kind in kind_strategy(), msg in ".*") {
        let outcome: Outcome = Outcome::fail(DomainError::new(kind, msg.clone()));
        let err = outcome.throw_if_failure().unwrap_err();
        prop_assert_eq!(err.kind(), kind);
        prop_assert_eq!(err.message(), msg.as_str());
    }

    #[test]
    fn normalization_is_idempotent(
        convention in convention_strategy(),
        key in "\\PC{0,24}",
    ) {
        let once = convention.apply(&key);
        prop_assert_eq!(convention.apply(&once), once);
    }

    #[test]
    fn projection_is_total_and_keys_are_normalized(
        kind in kind_strategy(),
        convention in convention_strategy(),
        fields in proptest::collection::vec(("[A-Za-z_]{1,12}", "[a-z ]{1,16}"), 0..6),
    ) {
        let mut err = DomainError::new(kind, "failure");
        for (field, message) in &fields {
            err = err.with_field_error(field.clone(), message.clone());
        }
        let problem = ProblemProjector::new(convention).project(&err);
        prop_assert_eq!(problem.status, kind.status().as_u16());
        prop_assert_eq!(problem.problem_type.as_str(), kind.problem_type());
        for key in problem.errors.keys() {
            prop_assert_eq!(&convention.apply(key), key);
        }
    }
}
