//! Runtime values.
//!
//! A closed tagged union: every first-class datum in a running program
//! is one of these variants, and equality, truthiness, and
//! stringification are defined only over this set. `Clone` is cheap —
//! heap variants clone a handle, not the payload — which is what makes
//! list mutation visible through every binding that holds the list.

use std::fmt;
use std::rc::Rc;

use crate::errors::{index_out_of_bounds, RuntimeError};
use crate::function::{FunctionValue, NativeFunction};
use crate::shared::Shared;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    List(ListValue),
    /// Host-provided callable.
    Native(Rc<NativeFunction>),
    /// User function paired with its captured closure environment.
    Function(Rc<FunctionValue>),
}

impl Value {
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(ListValue::new(elements))
    }

    /// Nil and false are falsey; every other value — including zero
    /// and the empty string — is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// The tag name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Native(_) => "native function",
            Value::Function(_) => "function",
        }
    }

    /// Render for `print` and the REPL.
    ///
    /// Numbers use the shortest decimal form; `f64`'s `Display`
    /// already trims an integral value's trailing ".0". Callables
    /// render as an opaque tag, never their source.
    pub fn stringify(&self) -> String {
        match self {
            Value::Nil => "nil".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Str(s) => s.to_string(),
            Value::List(list) => list.stringify(),
            Value::Native(f) => format!("<native fn {}>", f.name),
            Value::Function(f) => match f.decl.name.as_ref() {
                Some(name) => format!("<fn {}>", name.lexeme),
                None => "<fn>".to_owned(),
            },
        }
    }
}

/// Equality: by value within the same tag, never across tags, no
/// coercion. Lists compare element-wise (deep); callables compare by
/// identity, since two closures from one declaration are distinct
/// values with distinct captured environments.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(list) => write!(f, "List({})", list.stringify()),
            Value::Native(native) => write!(f, "Native({})", native.name),
            Value::Function(func) => write!(f, "Function({})", func.decl.display_name()),
        }
    }
}

/// Shared, growable, index-addressable sequence.
///
/// Cloning a `ListValue` clones the handle: appends and element writes
/// through one handle are observed through all of them.
#[derive(Clone, Debug)]
pub struct ListValue(Shared<Vec<Value>>);

impl ListValue {
    pub fn new(elements: Vec<Value>) -> Self {
        ListValue(Shared::new(elements))
    }

    /// Append to the end. Amortized O(1).
    pub fn append(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Bounds-checked element read.
    pub fn get(&self, index: usize) -> Result<Value, RuntimeError> {
        let elements = self.0.borrow();
        elements
            .get(index)
            .cloned()
            .ok_or_else(|| index_out_of_bounds(index, elements.len()))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Bracketed, comma-joined rendering: `[1, a, [nested]]`.
    pub fn stringify(&self) -> String {
        let elements = self.0.borrow();
        let rendered: Vec<String> = elements.iter().map(Value::stringify).collect();
        format!("[{}]", rendered.join(", "))
    }

    /// Whether two handles share one allocation.
    pub fn same_list(a: &Self, b: &Self) -> bool {
        Shared::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for ListValue {
    fn eq(&self, other: &Self) -> bool {
        // A handle always equals itself; this also short-circuits the
        // element walk for the common aliased case.
        if Shared::ptr_eq(&self.0, &other.0) {
            return true;
        }
        *self.0.borrow() == *other.0.borrow()
    }
}
