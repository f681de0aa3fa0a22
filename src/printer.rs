use super::*;

/// Renders synthesized expressions as C# text.
///
/// Spliced nodes are copied byte for byte from the document they were
/// parsed from.
#[derive(Debug)]
pub struct Printer<'a> {
  document: &'a Document,
}

impl<'a> Printer<'a> {
  pub fn new(document: &'a Document) -> Self {
    Self { document }
  }

  pub fn print(&self, expression: &Expression) -> String {
    let mut output = String::new();
    self.write(expression, &mut output);
    output
  }

  fn write(&self, expression: &Expression, output: &mut String) {
    match expression {
      Expression::Call { callee, arguments } => {
        self.write(callee, output);

        output.push('(');

        for (index, argument) in arguments.iter().enumerate() {
          if index > 0 {
            output.push_str(", ");
          }

          self.write(argument, output);
        }

        output.push(')');
      }
      Expression::ConditionalAccess { target, name } => {
        self.write(target, output);
        output.push_str("?.");
        output.push_str(name);
      }
      Expression::Identifier(name) => output.push_str(name),
      Expression::MemberAccess { target, name } => {
        self.write(target, output);
        output.push('.');
        output.push_str(name);
      }
      Expression::Original(node) => {
        output.push_str(&self.document.text(*node));
      }
    }
  }
}
