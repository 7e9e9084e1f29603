mod infix_converter;

pub(crate) use crate::notation::parser::infix_converter::infix_to_postfix;
