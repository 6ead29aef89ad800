use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    rc::Rc,
};

use indexmap::IndexMap;

use crate::{
    ast::PlaceholderId,
    interpreter::value::core::{Object, Value},
};

/// The environment of one activation: a module run or a function call.
///
/// A scope is a cheap handle; clones share the same environment. Function
/// values keep their defining scope alive through such a handle.
#[derive(Clone)]
pub struct Scope(Rc<ScopeData>);

struct ScopeData {
    /// Variables, in assignment order.
    entries: Object,
    /// The lexically enclosing scope, if any.
    parent:  Option<Scope>,
    /// The source file the activation runs code from.
    origin:  Option<Rc<Path>>,
    frame:   RefCell<Frame>,
}

/// Per-activation argument and return state.
#[derive(Default)]
struct Frame {
    args:         Vec<Value>,
    /// Next positional argument for placeholders without an index.
    arg_index:    usize,
    resolved:     HashMap<PlaceholderId, Value>,
    return_value: Option<Value>,
}

impl Scope {
    /// Creates a scope with no variables.
    ///
    /// Without an explicit `origin` the parent's origin is inherited.
    ///
    /// # Parameters
    /// - `parent`: The lexically enclosing scope.
    /// - `args`: Positional arguments for placeholders.
    /// - `origin`: The source file being run, if known.
    #[must_use]
    pub fn new(parent: Option<Self>, args: Vec<Value>, origin: Option<Rc<Path>>) -> Self {
        let origin = origin.or_else(|| parent.as_ref().and_then(|p| p.0.origin.clone()));
        tracing::trace!(args = args.len(), nested = parent.is_some(), "creating scope");

        Self(Rc::new(ScopeData { entries: Rc::default(),
                                 parent,
                                 origin,
                                 frame: RefCell::new(Frame { args,
                                                             ..Frame::default() }) }))
    }

    /// Returns the value of a variable of this scope, or `null`.
    ///
    /// Enclosing scopes are not searched; they are reachable through
    /// `parent` only.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Value {
        self.0
            .entries
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Sets a variable of this scope.
    pub fn set(&self, name: String, value: Value) {
        self.0.entries.borrow_mut().insert(name, value);
    }

    /// Replaces every variable of this scope with `entries`.
    pub fn replace_entries(&self, entries: IndexMap<String, Value>) {
        *self.0.entries.borrow_mut() = entries;
    }

    /// Returns the scope's variables as an object value.
    ///
    /// The object shares storage with the scope, so writes through it are
    /// writes to the scope.
    #[must_use]
    pub fn as_value(&self) -> Value {
        Value::Object(Rc::clone(&self.0.entries))
    }

    /// Returns the lexically enclosing scope.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    /// Returns the directory relative paths are resolved against.
    ///
    /// That is the directory of the origin file, or the working directory
    /// when the code did not come from a file.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.0
            .origin
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(PathBuf::new, Path::to_path_buf)
    }

    /// Returns the memoized value of a placeholder node, if resolved before.
    #[must_use]
    pub fn resolved_argument(&self, id: PlaceholderId) -> Option<Value> {
        self.0.frame.borrow().resolved.get(&id).cloned()
    }

    /// Takes a positional argument for a placeholder.
    ///
    /// With an explicit index that slot is read. Otherwise the cursor slot is
    /// read and the cursor advances, whether or not the slot exists.
    #[must_use]
    pub fn take_argument(&self, index: Option<usize>) -> Option<Value> {
        let mut frame = self.0.frame.borrow_mut();
        let slot = index.unwrap_or_else(|| {
                             let cursor = frame.arg_index;
                             frame.arg_index += 1;
                             cursor
                         });
        frame.args.get(slot).cloned()
    }

    /// Memoizes the value of a placeholder node.
    pub fn cache_argument(&self, id: PlaceholderId, value: Value) {
        self.0.frame.borrow_mut().resolved.insert(id, value);
    }

    /// Returns the value stored by `returning` or `return`.
    #[must_use]
    pub fn return_value(&self) -> Option<Value> {
        self.0.frame.borrow().return_value.clone()
    }

    /// Stores the activation's return value.
    pub fn set_return_value(&self, value: Value) {
        self.0.frame.borrow_mut().return_value = Some(value);
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
         .field("variables", &self.0.entries.borrow().keys().collect::<Vec<_>>())
         .field("origin", &self.0.origin)
         .finish_non_exhaustive()
    }
}
