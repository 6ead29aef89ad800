use crate::interpreter::value::{function::Arity, method::method_table};

method_table! {
    BOOLEAN_METHODS {
        "and" => { arity: Arity::Exact(1), func: |_, receiver, args, _| Ok((receiver.is_truthy() && args[0].is_truthy()).into()) },
        "or"  => { arity: Arity::Exact(1), func: |_, receiver, args, _| Ok((receiver.is_truthy() || args[0].is_truthy()).into()) },
    }
}
