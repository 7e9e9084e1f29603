use crate::notation::operator::BinaryOperator;
use crate::notation::stack::Stack;
use crate::notation::syntax::expression_tree::Node;

/// Receives the steps of a depth-first, left-to-right walk of an expression tree.
///
/// For every operation the visitor is told when it is entered, when its left operand is
/// done, and when it is exited. Unimplemented methods ignore the step.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_operand(&mut self, _value: &str) {}
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {}
    fn between_operands(&mut self, _operator: &BinaryOperator) {}
    fn exit_binary_operation(&mut self, _operator: &BinaryOperator) {}
}

enum Step<'a> {
    Enter(&'a Node),
    Between(BinaryOperator),
    Exit(BinaryOperator),
}

/// Walks the tree with an explicit work stack, so depth is bounded by heap memory only.
pub(crate) fn walk(root: &Node, visitor: &mut impl SyntaxVisitor) {
    let mut pending: Stack<Step> = Stack::new();
    pending.push(Step::Enter(root));

    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(Node::Operand(value)) => visitor.visit_operand(value),
            Step::Enter(Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            }) => {
                visitor.enter_binary_operation(operator);
                pending.push(Step::Exit(*operator));
                pending.push(Step::Enter(right_operand));
                pending.push(Step::Between(*operator));
                pending.push(Step::Enter(left_operand));
            }
            Step::Between(operator) => visitor.between_operands(&operator),
            Step::Exit(operator) => visitor.exit_binary_operation(&operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_complex_tree() -> Node {
        let a = Node::new_operand("a");
        let b = Node::new_operand("b");
        let c = Node::new_operand("c");
        let d = Node::new_operand("d");
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, b, c);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, d);
        Node::new_binary_operation(BinaryOperator::Add, a, star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_operand(&mut self, value: &str) {
            self.prints.push(value.to_string())
        }
        fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
            self.prints.push(format!("{:?}", operator));
        }
        fn between_operands(&mut self, operator: &BinaryOperator) {
            self.prints.push(format!("{}", operator));
        }
        fn exit_binary_operation(&mut self, operator: &BinaryOperator) {
            self.prints.push(format!("exit {:?}", operator));
        }
    }

    struct OperandCounter {
        count: usize,
    }

    impl SyntaxVisitor for OperandCounter {
        fn visit_operand(&mut self, _value: &str) {
            self.count += 1;
        }
    }

    #[test]
    fn walk_tree_reports_every_step_in_order() {
        let root = create_complex_tree();
        println!("{}", root);
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Add",
                "a",
                "+",
                "Multiply",
                "Add",
                "b",
                "+",
                "c",
                "exit Add",
                "*",
                "d",
                "exit Multiply",
                "exit Add",
            ]
        )
    }

    #[test]
    fn default_walk_reaches_every_leaf() {
        let root = create_complex_tree();
        let mut visitor = OperandCounter { count: 0 };
        root.accept(&mut visitor);
        assert_eq!(visitor.count, 4)
    }
}
