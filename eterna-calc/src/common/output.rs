use std::{
    fmt::Display,
    ops::{
        Div,
        Mul,
    },
};

/// A value paired with a description of each step that produced it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Output<T> {
    value: T,
    description: Vec<String>,
}

impl<T> Output<T>
where
    T: Default,
{
    /// Starts the output with a new value with an attached message.
    pub fn start<V, S>(val: V, reason: S) -> Self
    where
        V: Clone + Display + Into<T>,
        S: Display,
    {
        let mut s = Self::default();
        s.set(val, reason);
        s
    }

    /// The current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Description of all changes.
    pub fn description(&self) -> &[String] {
        self.description.as_slice()
    }

    /// Multiplies the value.
    pub fn mul<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Mul<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.mul(rhs.clone());
        self.description.push(format!("x{rhs} - {reason}"));
    }

    /// Divides the value.
    pub fn div<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Div<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.div(rhs.clone());
        self.description.push(format!("\u{00F7}{rhs} - {reason}"));
    }

    /// Sets the value.
    fn set<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display + Into<T>,
        S: Display,
    {
        self.value = rhs.clone().into();
        self.description.push(format!("={rhs} - {reason}"));
    }

    /// Maps to a value of another type.
    pub fn map<F, M, S>(mut self, f: F, reason: S) -> Output<M>
    where
        F: FnOnce(T) -> M,
        S: Display,
    {
        let value = f(self.value);
        self.description.push(format!("[mapped] - {reason}"));
        Output {
            value,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod output_test {
    use pretty_assertions::assert_eq;

    use crate::common::Output;

    #[test]
    fn describes_each_operation() {
        let mut output = Output::<f64>::start(0.5, "damage factor");
        output.mul(100.0, "power");
        assert_eq!(output.value(), &50.0);

        output.mul(150.0, "attack");
        output.div(120.0, "defense");
        assert_eq!(output.value(), &62.5);
        assert_eq!(
            output.description().join(";"),
            "=0.5 - damage factor;x100 - power;x150 - attack;\u{00F7}120 - defense"
        );

        let output = output.map(|val| val.floor() as u32 + 1, "floor");
        assert_eq!(output.value(), &63);
        assert_eq!(
            output.description().last().map(String::as_str),
            Some("[mapped] - floor")
        );
    }

    #[test]
    fn set_replaces_value() {
        let mut output = Output::<f64>::start(1.3, "trainer constant");
        output.mul(1.2, "STAB");
        output.set(2.0, "override");
        assert_eq!(output.value(), &2.0);
        assert_eq!(
            output.description(),
            &[
                "=1.3 - trainer constant".to_owned(),
                "x1.2 - STAB".to_owned(),
                "=2 - override".to_owned(),
            ]
        );
    }
}
