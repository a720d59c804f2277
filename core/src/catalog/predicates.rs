//! Predicate overload table, transcribed from the TinkerPop `P`/`TextP`
//! javadoc. Ordering within an entry matters: the resolver breaks score
//! ties by table position.

use super::{p, pd, pn, sig, Signature};
use super::Kind::{Any, Predicate, String};

pub(super) static PREDICATES: &[(&str, &[Signature])] = &[
    (
        "containing",
        &[sig(
            "3.4.0",
            None,
            "Determines if String does contain the given value.",
            &[p(String, "value")],
        )],
    ),
    (
        "endingWith",
        &[sig(
            "3.4.0",
            None,
            "Determines if String does start with the given value.",
            &[p(String, "value")],
        )],
    ),
    (
        "equals",
        &[sig(
            "3.0.0-incubating",
            None,
            "Indicates whether some other object is \"equal to\" this one.",
            &[p(Any, "other")],
        )],
    ),
    (
        "negate",
        &[sig(
            "3.0.0-incubating",
            None,
            "Returns a predicate that represents the logical negation of this predicate.",
            &[],
        )],
    ),
    (
        "notContaining",
        &[sig(
            "3.4.0",
            None,
            "Determines if String does not contain the given value.",
            &[p(String, "value")],
        )],
    ),
    (
        "notEndingWith",
        &[sig(
            "3.4.0",
            None,
            "Determines if String does not start with the given value.",
            &[p(String, "value")],
        )],
    ),
    (
        "notStartingWith",
        &[sig(
            "3.4.0",
            None,
            "Determines if String does not start with the given value.",
            &[p(String, "value")],
        )],
    ),
    (
        "startingWith",
        &[sig(
            "3.4.0",
            None,
            "Determines if String does start with the given value.",
            &[p(String, "value")],
        )],
    ),
    (
        "and",
        &[
            sig(
                "3.0.0-incubating",
                None,
                "Returns a composed predicate that represents a short-circuiting logical AND of this predicate and another. When evaluating the composed predicate, if this predicate is false, then the other predicate is not evaluated.\n\nAny exceptions thrown during evaluation of either predicate are relayed to the caller; if evaluation of this predicate throws an exception, the other predicate will not be evaluated.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                None,
                "Returns a composed predicate that represents a short-circuiting logical AND of this predicate and another. When evaluating the composed predicate, if this predicate is false, then the other predicate is not evaluated.\n\nAny exceptions thrown during evaluation of either predicate are relayed to the caller; if evaluation of this predicate throws an exception, the other predicate will not be evaluated.",
                &[pd(
                    Predicate,
                    "other",
                    "a predicate that will be logically-ANDed with this predicate",
                )],
            ),
        ],
    ),
    (
        "between",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is within (inclusive) of the range of the two specified values.",
            &[p(String, "first"), p(String, "second")],
        )],
    ),
    (
        "eq",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if values are equal.",
            &[p(Any, "value")],
        )],
    ),
    (
        "gt",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is greater than another.",
            &[p(Any, "value")],
        )],
    ),
    (
        "gte",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is greater than or equal to another.",
            &[p(Any, "value")],
        )],
    ),
    (
        "inside",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is within (exclusive) the range of the two specified values.",
            &[p(Any, "first"), p(Any, "second")],
        )],
    ),
    (
        "lt",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is less than another.",
            &[p(Any, "value")],
        )],
    ),
    (
        "lte",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is less than or equal to another.",
            &[p(Any, "value")],
        )],
    ),
    (
        "neq",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if values are not equal.",
            &[p(Any, "value")],
        )],
    ),
    (
        "not",
        &[sig(
            "3.0.0-incubating",
            None,
            "The opposite of the specified P.",
            &[p(Predicate, "predicate")],
        )],
    ),
    (
        "or",
        &[
            sig(
                "3.0.0-incubating",
                None,
                "Returns a composed predicate that represents a short-circuiting logical OR of this predicate and another. When evaluating the composed predicate, if this predicate is true, then the other predicate is not evaluated.\n\nAny exceptions thrown during evaluation of either predicate are relayed to the caller; if evaluation of this predicate throws an exception, the other predicate will not be evaluated.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                None,
                "Returns a composed predicate that represents a short-circuiting logical OR of this predicate and another. When evaluating the composed predicate, if this predicate is true, then the other predicate is not evaluated.\n\nAny exceptions thrown during evaluation of either predicate are relayed to the caller; if evaluation of this predicate throws an exception, the other predicate will not be evaluated.",
                &[pd(
                    Predicate,
                    "other",
                    "a predicate that will be logically-ORed with this predicate",
                )],
            ),
        ],
    ),
    (
        "outside",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is not within (exclusive) of the range of the two specified values.",
            &[p(Any, "first"), p(Any, "second")],
        )],
    ),
    (
        "within",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is within the specified list of values.",
            &[pn(Any, "values")],
        )],
    ),
    (
        "without",
        &[sig(
            "3.0.0-incubating",
            None,
            "Determines if a value is not within the specified list of values.",
            &[pn(Any, "values")],
        )],
    ),
];
