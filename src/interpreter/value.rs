/// The `Value` enum and the behavior shared by every kind.
///
/// Holds truthiness, equality, the printed form and the JSON form.
pub mod core;
/// Soft path application.
///
/// Reading a key never fails: missing keys and unknown attributes yield
/// `null`. Writing a key is limited to objects and arrays.
pub mod access;
/// Function values.
///
/// Defines closures, bound builtin methods, builtin definitions and their
/// arity rules.
pub mod function;
/// Builtin method tables.
///
/// Provides the `method_table!` macro, the methods every value carries, and
/// the lookup of a method name for a given receiver.
pub mod method;
/// Number methods: arithmetic and comparisons.
pub mod number;
/// String methods and the `length` attribute.
pub mod string;
/// Boolean methods.
pub mod boolean;
/// Array methods and the `length` attribute.
pub mod array;
/// Object methods.
pub mod object;
