use std::{
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use indexmap::IndexMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        parser::core::parse_module,
        scope::Scope,
        value::{
            core::Value,
            function::{Arity, Callable},
            method::method_table,
        },
    },
};

/// Extension tried when a module path does not name a file as written.
pub const SOURCE_EXTENSION: &str = "meth";

/// Name of the builtin module.
pub const BUILTIN_MODULE: &str = "utils";

method_table! {
    UTILS_FUNCTIONS {
        "log" => { arity: Arity::Any, func: |ctx, _, args, line| {
            let text = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
            ctx.write_line(&text, line)?;
            Ok(Value::Null)
        } },
    }
}

impl Context<'_> {
    /// Resolves a `load` expression.
    ///
    /// `utils` yields a new object holding the builtin functions. Any other
    /// name is a path relative to the directory of the file the active scope
    /// runs code from (or the working directory). The path is read as
    /// written, then with the `.meth` extension appended. The file is parsed
    /// and run as an independent program, and its top-level scope is
    /// returned as an object.
    ///
    /// Modules are neither cached nor guarded against cycles.
    ///
    /// # Errors
    /// - `RuntimeError::ModuleNotFound` if neither path can be read.
    /// - `RuntimeError::InvalidModule` if the file does not parse.
    /// - Any error raised while running the module.
    pub fn load_module(&mut self, name: &str, line: usize, scope: &Scope) -> EvalResult<Value> {
        if name == BUILTIN_MODULE {
            tracing::debug!(module = name, "loading builtin module");
            return Ok(builtin_module());
        }

        let base = scope.base_dir().join(name);
        let candidates = [base.clone(), with_source_extension(&base)];
        let Some((path, source)) =
            candidates.into_iter()
                      .find_map(|path| fs::read_to_string(&path).ok().map(|source| (path, source)))
        else {
            return Err(RuntimeError::ModuleNotFound { name: name.to_string(),
                                                      line });
        };
        tracing::debug!(module = name, path = %path.display(), "loading module");

        let lines = parse_module(&source).map_err(|source| {
                                              RuntimeError::InvalidModule { name: name.to_string(),
                                                                            line,
                                                                            source }
                                          })?;
        let origin: Rc<Path> = Rc::from(path.as_path());
        let (_, module_scope) = self.run_lines(&lines, Vec::new(), None, Some(origin))?;

        Ok(module_scope.as_value())
    }
}

/// Builds the object returned by `load 'utils'`.
fn builtin_module() -> Value {
    let entries = UTILS_FUNCTIONS.iter()
                                 .map(|def| {
                                     let function = Callable::Builtin { receiver: Value::Null,
                                                                        def };
                                     (def.name.to_string(), function.into())
                                 })
                                 .collect::<IndexMap<String, Value>>();
    entries.into()
}

/// Appends the source extension to a path, keeping any extension it has.
fn with_source_extension(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(SOURCE_EXTENSION);
    PathBuf::from(name)
}
