//! The demonstration steps, in the order they run.
//!
//! Each step reads and writes only the bindings of the [`Session`] it is
//! handed. The counter lives under `x` and the sum result under `y`.

use serde::Serialize;

use crate::error::RuntimeError;
use crate::ops::{classify, divide, doble, range, suma};
use crate::session::{guarded, Session};
use crate::Value;

/// Signature shared by every step.
pub type StepFn = fn(&mut Session<'_>) -> Result<(), RuntimeError>;

/// One demonstration step.
#[derive(Clone, Copy, Serialize)]
pub struct Step {
    /// Stable identifier
    pub id: &'static str,
    /// What the step demonstrates
    pub description: &'static str,
    /// The step is known to fail on every run
    pub expected_failure: bool,
    #[serde(skip)]
    run: StepFn,
}

impl Step {
    /// A step expected to pass.
    pub const fn new(id: &'static str, description: &'static str, run: StepFn) -> Self {
        Self {
            id,
            description,
            expected_failure: false,
            run,
        }
    }

    /// A step known to fail on every run.
    pub const fn failing(id: &'static str, description: &'static str, run: StepFn) -> Self {
        Self {
            id,
            description,
            expected_failure: true,
            run,
        }
    }

    /// Execute the step against `session`.
    pub fn run(&self, session: &mut Session<'_>) -> Result<(), RuntimeError> {
        (self.run)(session)
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("expected_failure", &self.expected_failure)
            .finish()
    }
}

/// Every step, in execution order.
pub static STEPS: [Step; 13] = [
    Step::new("add", "call a two-argument function", add),
    Step::new("conditional", "if / elif / else on the sum", conditional),
    Step::new("countdown", "while loop decrementing the counter", countdown),
    Step::new("fixed-range", "for over range(3)", fixed_range),
    Step::new("bounded-range", "for over range(1, 5)", bounded_range),
    Step::new("stepped-range", "for over range(1, 5, 2)", stepped_range),
    Step::new(
        "guarded-division",
        "try / except / finally around a division by zero",
        guarded_division,
    ),
    Step::new("doubling", "call a lambda", doubling),
    Step::new("booleans", "bind boolean literals", booleans),
    Step::new("negative-literal", "bind a negative literal", negative_literal),
    Step::new("list-index", "index a mixed list", list_index),
    Step::failing(
        "undefined-reference",
        "index a list that was never declared",
        undefined_reference,
    ),
    Step::new("fruit-index", "index a list of strings", fruit_index),
];

/// Look up a step by id.
pub fn find(id: &str) -> Option<&'static Step> {
    STEPS.iter().find(|step| step.id == id)
}

fn add(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    session.scope.define("x", 5_i64);
    let x = session.scope.get_integer("x")?;
    session.scope.define("y", suma(x, 10));
    Ok(())
}

fn conditional(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    let y = session.scope.get_integer("y")?;
    session.print_value(classify(y))
}

fn countdown(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    let mut x = session.scope.get_integer("x")?;
    while x > 0 {
        session.print_value(x)?;
        x -= 1;
        session.scope.set("x", x)?;
    }
    Ok(())
}

fn print_range(
    session: &mut Session<'_>,
    start: i64,
    stop: i64,
    step: i64,
) -> Result<(), RuntimeError> {
    for i in range(start, stop, step)? {
        session.scope.define("i", i);
        session.print_value(i)?;
    }
    Ok(())
}

fn fixed_range(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    print_range(session, 0, 3, 1)
}

fn bounded_range(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    print_range(session, 1, 5, 1)
}

fn stepped_range(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    print_range(session, 1, 5, 2)
}

fn guarded_division(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    guarded(
        session,
        |s| {
            let y = s.scope.get_integer("y")?;
            let z = divide(y, 0)?;
            s.scope.define("z", z);
            Ok(())
        },
        |s, err| s.print(&[Value::from("Error:"), Value::from(err.to_string())]),
        |s| s.print_value("Finalizando..."),
    )
}

fn doubling(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    let doble = doble();
    session.print_value(doble(7))
}

fn booleans(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    session.scope.define("activo", true);
    session.scope.define("inactivo", false);
    Ok(())
}

fn negative_literal(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    session.scope.define("negativo", -42_i64);
    Ok(())
}

fn list_index(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    session.scope.define(
        "arr",
        vec![Value::from(0_i64), Value::from("azul"), Value::from(34_i64)],
    );
    session.scope.index("arr", 2)?;
    Ok(())
}

// `arreglo` is never bound; the list above is `arr`. Kept as written: this
// step always fails with a name-resolution error.
fn undefined_reference(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    let value = session.scope.index("arreglo", 4)?;
    session.print_value(value)
}

fn fruit_index(session: &mut Session<'_>) -> Result<(), RuntimeError> {
    session.scope.define(
        "frutas",
        vec![
            Value::from("Manzana"),
            Value::from("Naranja"),
            Value::from("Mango"),
        ],
    );
    let fruta = session.scope.index("frutas", 1)?;
    session.print_value(fruta)
}
