#![cfg(feature = "wrap")]
//! Property-based tests for wrapping laws.
//!
//! ## Flattening Laws
//! - **Layered Chains**: a chain of wraps called once equals calling each
//!   layer in turn, which equals the direct call
//! - **Partial Associativity**: `partial(partial(f, a), b) == partial(f, a ++ b)`
//! - **Separate Layers**: any sequence of wraps built through one engine
//!   behaves like the same sequence built through one engine per layer
//!
//! ## Curry Laws
//! - **Equivalence**: `curry(f)(a)(b)(c) == f(a, b, c)` for every grouping
//! - **Right Equivalence**: `curry_right(f)(c)(b)(a) == f(a, b, c)`
//!
//! ## Flip Laws
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b, c) == f(c, b, a)`
//!
//! ## Reshaping Laws
//! - **Identity Permutation**: `rearg(f, [0, 1, ..])` == `f`
//! - **Cap**: `ary(f, n)(args) == f(args[..n])`

use funcwrap::value::{Function, Value};
use funcwrap::wrap::{self, Slot, WrapEngine, WrapFlags, WrapRequest};
use funcwrap::{args, slots};
use proptest::prelude::*;

fn list(arity: usize) -> Function {
    Function::new("list", arity, |_, arguments| Ok(Value::Array(arguments.to_vec())))
}

fn numbers(values: &[i32]) -> Value {
    Value::Array(values.iter().copied().map(Value::from).collect())
}

fn invoke(value: &Value, arguments: &[Value]) -> Value {
    value
        .as_function()
        .expect("expected a function")
        .invoke(arguments)
        .expect("call failed")
}

// =============================================================================
// Flattening Laws
// =============================================================================

proptest! {
    /// bind -> partial -> curry -> partial equals the direct call.
    #[test]
    fn prop_layered_chain_equals_direct_call(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
        fourth in any::<i32>(),
    ) {
        let target = list(4);
        let bound = wrap::bind(&target, Value::Null, Vec::new()).unwrap();
        let partial = wrap::partial(&bound, slots![first]).unwrap();
        let curried = wrap::curry(&partial, None).unwrap();
        let last = Value::from(wrap::partial(&curried, slots![second]).unwrap());

        let pending = invoke(&last, &args![third]);
        let result = invoke(&pending, &args![fourth]);

        prop_assert_eq!(result, numbers(&[first, second, third, fourth]));
    }

    /// partial(partial(f, a), b) == partial(f, a ++ b)
    #[test]
    fn prop_partial_associativity(
        left in prop::collection::vec(any::<i32>(), 0..4),
        right in prop::collection::vec(any::<i32>(), 0..4),
        rest in prop::collection::vec(any::<i32>(), 0..4),
    ) {
        let to_slots = |values: &[i32]| -> Vec<Slot> {
            values.iter().map(|&value| Slot::Fixed(Value::from(value))).collect()
        };
        let target = list(6);

        let layered = wrap::partial(wrap::partial(&target, to_slots(&left)).unwrap(), to_slots(&right)).unwrap();
        let combined: Vec<i32> = left.iter().chain(&right).copied().collect();
        let direct = wrap::partial(&target, to_slots(&combined)).unwrap();

        let call_arguments: Vec<Value> = rest.iter().copied().map(Value::from).collect();
        prop_assert_eq!(
            layered.invoke(&call_arguments).unwrap(),
            direct.invoke(&call_arguments).unwrap()
        );
    }

    /// Hole-filling layers agree with calling each layer in turn.
    #[test]
    fn prop_holes_filled_by_later_layers(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
    ) {
        let target = list(3);
        let holed = wrap::partial(&target, slots![__, second, __]).unwrap();
        let filled = wrap::partial(&holed, slots![first]).unwrap();

        prop_assert_eq!(
            filled.invoke(&args![third]).unwrap(),
            numbers(&[first, second, third])
        );
    }

    /// partial_right over partial places both sides around the call arguments.
    #[test]
    fn prop_partial_both_sides(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
    ) {
        let left = wrap::partial(list(3), slots![first]).unwrap();
        let both = wrap::partial_right(&left, slots![third]).unwrap();

        prop_assert_eq!(both.invoke(&args![second]).unwrap(), numbers(&[first, second, third]));
    }
}

/// One wrap applied on top of the previous one.
#[derive(Clone, Debug)]
enum Layer {
    Partial(i32),
    PartialRight(i32),
    Curry,
    CurryRight,
    Swap,
    Bind,
}

impl Layer {
    fn request(&self, function: Function) -> WrapRequest {
        match self {
            Self::Partial(value) => {
                WrapRequest::new(function, WrapFlags::PARTIAL).partials(slots![*value])
            }
            Self::PartialRight(value) => {
                WrapRequest::new(function, WrapFlags::PARTIAL_RIGHT).partials(slots![*value])
            }
            Self::Curry => WrapRequest::new(function, WrapFlags::CURRY),
            Self::CurryRight => WrapRequest::new(function, WrapFlags::CURRY_RIGHT),
            Self::Swap => WrapRequest::new(function, WrapFlags::REARG).arg_positions(vec![1, 0]),
            Self::Bind => WrapRequest::new(function, WrapFlags::BIND).receiver(Value::Null),
        }
    }
}

fn layer_strategy() -> impl Strategy<Value = Layer> {
    prop_oneof![
        any::<i32>().prop_map(Layer::Partial),
        any::<i32>().prop_map(Layer::PartialRight),
        Just(Layer::Curry),
        Just(Layer::CurryRight),
        Just(Layer::Swap),
        Just(Layer::Bind),
    ]
}

/// Calls with one argument at a time while the result is a function.
/// Returns how many calls were made and the final value.
fn drive(function: Function, arguments: &[i32]) -> (usize, Value) {
    let mut current = Value::from(function);
    let mut calls = 0;
    for &argument in arguments {
        let Some(function) = current.as_function().cloned() else {
            break;
        };
        current = function.invoke(&args![argument]).expect("call failed");
        calls += 1;
    }
    (calls, current)
}

proptest! {
    /// Flattened layers behave like the same layers kept apart.
    #[test]
    fn prop_flattened_layers_match_separate_layers(
        layers in prop::collection::vec(layer_strategy(), 1..5),
        arguments in prop::collection::vec(any::<i32>(), 8),
    ) {
        let shared = WrapEngine::new();
        let mut flattened = list(4);
        let mut separate = list(4);
        for layer in &layers {
            flattened = shared.wrap(layer.request(flattened)).unwrap();
            separate = WrapEngine::new().wrap(layer.request(separate)).unwrap();
        }

        prop_assert_eq!(flattened.arity(), separate.arity());
        prop_assert_eq!(drive(flattened, &arguments), drive(separate, &arguments));
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// curry(f)(a)(b)(c) == curry(f)(a, b)(c) == curry(f)(a, b, c) == f(a, b, c)
    #[test]
    fn prop_curry_equivalence(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
    ) {
        let curried = Value::from(wrap::curry(list(3), None).unwrap());
        let expected = numbers(&[first, second, third]);

        let one_at_a_time = invoke(&invoke(&invoke(&curried, &args![first]), &args![second]), &args![third]);
        let grouped = invoke(&invoke(&curried, &args![first, second]), &args![third]);
        let all = invoke(&curried, &args![first, second, third]);

        prop_assert_eq!(&one_at_a_time, &expected);
        prop_assert_eq!(&grouped, &expected);
        prop_assert_eq!(&all, &expected);
    }

    /// curry_right(f)(c)(b)(a) == f(a, b, c)
    #[test]
    fn prop_curry_right_equivalence(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
    ) {
        let curried = Value::from(wrap::curry_right(list(3), None).unwrap());

        let result = invoke(&invoke(&invoke(&curried, &args![third]), &args![second]), &args![first]);
        prop_assert_eq!(result, numbers(&[first, second, third]));
    }

    /// Currying the right side after fixing a right partial counts down
    /// the remaining arity.
    #[test]
    fn prop_curry_right_over_partial_right(
        first in any::<i32>(),
        second in any::<i32>(),
        third in any::<i32>(),
    ) {
        let partial = wrap::partial_right(list(3), slots![third]).unwrap();
        let curried = Value::from(wrap::curry_right(&partial, None).unwrap());

        prop_assert_eq!(curried.as_function().unwrap().arity(), 2);
        let pending = invoke(&curried, &args![second]);
        prop_assert_eq!(pending.as_function().unwrap().arity(), 1);
        prop_assert_eq!(invoke(&pending, &args![first]), numbers(&[first, second, third]));
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// flip(flip(f)) == f
    #[test]
    fn prop_flip_double_identity(values in prop::collection::vec(any::<i32>(), 0..6)) {
        let target = list(values.len());
        let twice = wrap::flip(wrap::flip(&target).unwrap()).unwrap();

        let call_arguments: Vec<Value> = values.iter().copied().map(Value::from).collect();
        prop_assert_eq!(twice.invoke(&call_arguments).unwrap(), target.invoke(&call_arguments).unwrap());
    }

    /// flip(f)(a, b, c) == f(c, b, a)
    #[test]
    fn prop_flip_definition(values in prop::collection::vec(any::<i32>(), 0..6)) {
        let flipped = wrap::flip(list(values.len())).unwrap();
        let call_arguments: Vec<Value> = values.iter().copied().map(Value::from).collect();

        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(flipped.invoke(&call_arguments).unwrap(), numbers(&reversed));
    }
}

// =============================================================================
// Reshaping Laws
// =============================================================================

proptest! {
    /// rearg with the identity permutation changes nothing.
    #[test]
    fn prop_rearg_identity(values in prop::collection::vec(any::<i32>(), 0..6)) {
        let positions: Vec<usize> = (0..values.len()).collect();
        let reordered = wrap::rearg(list(values.len()), positions).unwrap();
        let call_arguments: Vec<Value> = values.iter().copied().map(Value::from).collect();

        prop_assert_eq!(reordered.invoke(&call_arguments).unwrap(), numbers(&values));
    }

    /// ary(f, n)(args) == f(args[..n])
    #[test]
    fn prop_ary_truncates(values in prop::collection::vec(any::<i32>(), 0..6), cap in 0usize..6) {
        let capped = wrap::ary(list(6), cap).unwrap();
        let call_arguments: Vec<Value> = values.iter().copied().map(Value::from).collect();

        let kept = cap.min(values.len());
        prop_assert_eq!(capped.invoke(&call_arguments).unwrap(), numbers(&values[..kept]));
    }
}
