//! Compact tree construction for unit tests

use ks_syntax::{NodeId, NodeSpec, SyntaxKind, SyntaxTree, TreeBuilder};

pub(crate) struct Sketch {
    builder: TreeBuilder,
}

impl Sketch {
    pub(crate) fn program(body: impl FnOnce(&mut Self)) -> SyntaxTree {
        let mut sketch = Self {
            builder: TreeBuilder::new(),
        };
        sketch.node(NodeSpec::new(SyntaxKind::Program).line(1), body);
        sketch.builder.finish().unwrap()
    }

    pub(crate) fn node(&mut self, spec: NodeSpec<'_>, body: impl FnOnce(&mut Self)) -> NodeId {
        let node = self.builder.start_node(spec);
        body(self);
        self.builder.finish_node();
        node
    }

    pub(crate) fn leaf(&mut self, spec: NodeSpec<'_>) -> NodeId {
        self.builder.leaf(spec)
    }

    /// `val name = 0`
    pub(crate) fn val(&mut self, name: &str, line: u32) -> NodeId {
        self.node(NodeSpec::property(name).line(line), |sk| {
            sk.leaf(NodeSpec::literal("0").line(line));
        })
    }

    /// `var name = 0`
    pub(crate) fn var(&mut self, name: &str, line: u32) -> NodeId {
        self.node(NodeSpec::property(name).line(line).mutable(), |sk| {
            sk.leaf(NodeSpec::literal("0").line(line));
        })
    }

    pub(crate) fn reference(&mut self, name: &str, line: u32) -> NodeId {
        self.leaf(NodeSpec::name_ref(name).line(line))
    }

    /// `use(name)`, returning the argument
    pub(crate) fn call_with(&mut self, name: &str, line: u32) -> NodeId {
        let mut argument = None;
        self.node(NodeSpec::new(SyntaxKind::Call).line(line), |sk| {
            sk.reference("use", line);
            sk.node(NodeSpec::new(SyntaxKind::ArgumentList).line(line), |sk| {
                argument = Some(sk.reference(name, line));
            });
        });
        argument.unwrap()
    }

    pub(crate) fn block(&mut self, line: u32, body: impl FnOnce(&mut Self)) -> NodeId {
        self.node(NodeSpec::new(SyntaxKind::Block).line(line), body)
    }

    fn parameter_list(&mut self, params: &[&str], line: u32) {
        self.node(NodeSpec::new(SyntaxKind::ParameterList).line(line), |sk| {
            for param in params {
                sk.leaf(NodeSpec::parameter(param).line(line));
            }
        });
    }

    /// `fun name(params) { body }`, returning the body block
    pub(crate) fn function(
        &mut self,
        name: &str,
        line: u32,
        params: &[&str],
        body: impl FnOnce(&mut Self),
    ) -> NodeId {
        let mut block = None;
        self.node(NodeSpec::new(SyntaxKind::Function).named(name).line(line), |sk| {
            sk.parameter_list(params, line);
            block = Some(sk.block(line, body));
        });
        block.unwrap()
    }

    /// `receiver.forEach { params -> body }`, returning the lambda body
    pub(crate) fn for_each(
        &mut self,
        receiver: &str,
        line: u32,
        params: &[&str],
        body: impl FnOnce(&mut Self),
    ) -> NodeId {
        let mut block = None;
        self.node(NodeSpec::new(SyntaxKind::DotQualified).line(line), |sk| {
            sk.reference(receiver, line);
            sk.node(NodeSpec::new(SyntaxKind::Call).line(line), |sk| {
                sk.reference("forEach", line);
                sk.node(NodeSpec::new(SyntaxKind::FunctionLiteral).line(line), |sk| {
                    sk.parameter_list(params, line);
                    block = Some(sk.block(line, body));
                });
            });
        });
        block.unwrap()
    }

    /// `class name { body }`, returning the class body
    pub(crate) fn class(&mut self, name: &str, line: u32, body: impl FnOnce(&mut Self)) -> NodeId {
        let mut class_body = None;
        self.node(NodeSpec::new(SyntaxKind::Class).named(name).line(line), |sk| {
            class_body = Some(sk.node(NodeSpec::new(SyntaxKind::ClassBody).line(line), body));
        });
        class_body.unwrap()
    }

    /// `object name { body }`, returning the object body
    pub(crate) fn object(&mut self, name: &str, line: u32, body: impl FnOnce(&mut Self)) -> NodeId {
        let mut object_body = None;
        self.node(NodeSpec::new(SyntaxKind::Object).named(name).line(line), |sk| {
            object_body = Some(sk.node(NodeSpec::new(SyntaxKind::ClassBody).line(line), body));
        });
        object_body.unwrap()
    }

    /// `if (flag) { then } else { otherwise }`, returning the `if` node and
    /// both branch blocks
    pub(crate) fn if_else(
        &mut self,
        line: u32,
        else_line: u32,
        then_body: impl FnOnce(&mut Self),
        else_body: impl FnOnce(&mut Self),
    ) -> [NodeId; 3] {
        let mut blocks = None;
        let if_node = self.node(NodeSpec::new(SyntaxKind::If).line(line), |sk| {
            sk.reference("flag", line);
            let mut then_block = None;
            sk.node(NodeSpec::new(SyntaxKind::Then).line(line), |sk| {
                then_block = Some(sk.block(line, then_body));
            });
            let mut else_block = None;
            sk.node(NodeSpec::new(SyntaxKind::Else).line(else_line), |sk| {
                else_block = Some(sk.block(else_line, else_body));
            });
            blocks = then_block.zip(else_block);
        });
        let (then_block, else_block) = blocks.unwrap();
        [if_node, then_block, else_block]
    }

    /// `try { body } catch (param) { handler }`, returning the `try` node
    /// and both blocks
    pub(crate) fn try_catch(
        &mut self,
        line: u32,
        catch_line: u32,
        param: &str,
        try_body: impl FnOnce(&mut Self),
        catch_body: impl FnOnce(&mut Self),
    ) -> [NodeId; 3] {
        let mut try_block = None;
        let mut catch_block = None;
        let try_node = self.node(NodeSpec::new(SyntaxKind::Try).line(line), |sk| {
            try_block = Some(sk.block(line, try_body));
            sk.node(NodeSpec::new(SyntaxKind::Catch).line(catch_line), |sk| {
                sk.parameter_list(&[param], catch_line);
                catch_block = Some(sk.block(catch_line, catch_body));
            });
        });
        [try_node, try_block.unwrap(), catch_block.unwrap()]
    }

    /// `receiver.selector`, returning the selector
    pub(crate) fn field(&mut self, receiver: NodeSpec<'_>, selector: &str, line: u32) -> NodeId {
        let mut selected = None;
        self.node(NodeSpec::new(SyntaxKind::DotQualified).line(line), |sk| {
            sk.leaf(receiver.line(line));
            selected = Some(sk.reference(selector, line));
        });
        selected.unwrap()
    }

    /// `name <operator> 1`, returning the target reference
    pub(crate) fn assign(&mut self, name: &str, operator: &str, line: u32) -> NodeId {
        let mut target = None;
        self.node(NodeSpec::new(SyntaxKind::Binary).line(line), |sk| {
            target = Some(sk.reference(name, line));
            sk.leaf(NodeSpec::operation(operator).line(line));
            sk.leaf(NodeSpec::literal("1").line(line));
        });
        target.unwrap()
    }

    /// `name++`, returning the operand
    pub(crate) fn increment(&mut self, name: &str, line: u32) -> NodeId {
        let mut operand = None;
        self.node(NodeSpec::new(SyntaxKind::Unary).line(line), |sk| {
            operand = Some(sk.reference(name, line));
            sk.leaf(NodeSpec::operation("++").line(line));
        });
        operand.unwrap()
    }
}
