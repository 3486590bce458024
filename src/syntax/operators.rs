use phf::phf_map;

use super::shunting_yard::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assoc {
    Right,
    Left,
}

impl Assoc {
    pub fn is_left(&self) -> bool {
        self == &Assoc::Left
    }

    pub fn flipped(self) -> Self {
        match self {
            Assoc::Left => Assoc::Right,
            Assoc::Right => Assoc::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub sym: &'static str,
    pub assoc: Assoc,
    pub prec: u8,
}

impl Operator {
    /// Whether `self`, sitting on the operator stack, has to be emitted before `op` is pushed.
    pub fn has_bigger_prec(&self, op: &Operator, direction: Direction) -> bool {
        self.prec > op.prec || (self.prec == op.prec && op.assoc_in(direction).is_left())
    }

    /// A mirrored token stream reads every operator backwards, so its associativity flips with it.
    pub fn assoc_in(&self, direction: Direction) -> Assoc {
        match direction {
            Direction::Forward => self.assoc,
            Direction::Mirrored => self.assoc.flipped(),
        }
    }
}

pub static OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator {
        prec: 10,
        assoc: Assoc::Left,
        sym: "+",
    },
    "-" => Operator {
        prec: 10,
        assoc: Assoc::Left,
        sym: "-",
    },
    "/" => Operator {
        prec: 20,
        assoc: Assoc::Left,
        sym: "/",
    },
    "*" => Operator {
        prec: 20,
        assoc: Assoc::Left,
        sym: "*",
    },
    "^" => Operator {
        prec: 30,
        assoc: Assoc::Right,
        sym: "^",
    },
};
