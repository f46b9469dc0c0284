use crate::holder::{Values, Variances};
use crate::make_variable;
use crate::scaffold::{Shape, Unit};
use crate::variable::Variable;

/// One demonstration call and how to build its result.
pub struct Scenario {
    pub call: &'static str,
    pub build: fn() -> Variable,
}

impl Scenario {
    pub fn run(&self) -> Variable {
        (self.build)()
    }
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            call: "make_variable!(f64; Shape[1], Unit(1))",
            build: || make_variable!(f64; Shape::new(vec![1]), Unit(1)),
        },
        Scenario {
            call: "make_variable!(f64; Shape[1])",
            build: || make_variable!(f64; Shape::new(vec![1])),
        },
        Scenario {
            call: "make_variable!(f64; Shape[1, 23], Values<f64>[1, 4, 5], Unit(1))",
            build: || {
                make_variable!(f64;
                    Shape::new(vec![1, 23]),
                    Values::<f64>::new(vec![1.0, 4.0, 5.0]),
                    Unit(1),
                )
            },
        },
        Scenario {
            call: "make_variable!(f64; Shape[1])",
            build: || make_variable!(f64; Shape::new(vec![1])),
        },
        Scenario {
            call: "make_variable!(f64; Shape[1, 2, 3], Variances<f64>[6, 7, 8], Unit(23))",
            build: || {
                make_variable!(f64;
                    Shape::new(vec![1, 2, 3]),
                    Variances::<f64>::new(vec![6.0, 7.0, 8.0]),
                    Unit(23),
                )
            },
        },
        Scenario {
            call: "make_variable!(f64)",
            build: || make_variable!(f64),
        },
        Scenario {
            call: "make_variable!(f32; Values[1, 2, 3])",
            build: || make_variable!(f32; Values::new(vec![1.0f32, 2.0, 3.0])),
        },
        Scenario {
            call: "make_variable!(f64; Unit(3))",
            build: || make_variable!(f64; Unit(3)),
        },
        Scenario {
            call: "make_variable!(f64; Values<f64>[1, 4, 5], Unit(1))",
            build: || make_variable!(f64; Values::<f64>::new(vec![1.0, 4.0, 5.0]), Unit(1)),
        },
    ]
}
