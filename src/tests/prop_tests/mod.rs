mod generator;
use generator::*;

use proptest::prelude::*;

use crate::prelude::*;

pub mod board_rules;
