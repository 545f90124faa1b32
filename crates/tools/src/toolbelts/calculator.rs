use serde::Deserialize;
use serde_json::{json, Value};

use crate::register_toolbelt;
use crate::schemas::number;

#[derive(Default)]
pub struct Calculator;

#[derive(Deserialize, Debug)]
pub struct SumArgs {
    pub num1: f64,
    pub num2: f64,
}

#[derive(Deserialize, Debug)]
pub struct PrimeArgs {
    pub num: f64,
}

register_toolbelt! {
    Calculator {
        description: "Basic arithmetic on numbers",
        tools: {
            "sum" => sum(SumArgs) {
                description: "Takes 2 numbers and returns their sum",
                params: [
                    "num1": "number" => "first number",
                    "num2": "number" => "second number"
                ]
            },
            "prime" => prime(PrimeArgs) {
                description: "Checks if a number is prime",
                params: ["num": "number" => "number to check"]
            }
        }
    }
}

impl Calculator {
    fn sum(&self, args: SumArgs) -> Value {
        number(args.num1 + args.num2)
    }

    fn prime(&self, args: PrimeArgs) -> Value {
        json!(is_prime(args.num))
    }
}

/// Trial division up to the square root. Anything below 2 is not prime.
pub fn is_prime(num: f64) -> bool {
    if num < 2.0 {
        return false;
    }

    let limit = num.sqrt();
    let mut divisor = 2.0;
    while divisor <= limit {
        if num % divisor == 0.0 {
            return false;
        }
        divisor += 1.0;
    }
    true
}
