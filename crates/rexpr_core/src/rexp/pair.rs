use crate::rexp::{Content, Rexp};

/// One node of a dotted-pair chain: head, optional tag, optional tail.
///
/// A present tail always wraps another pair-kind value; both public
/// constructors preserve that shape, so consumers never observe a tail of
/// any other kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
	head: Box<Rexp>,
	tag: Option<Box<Rexp>>,
	rest: Option<Box<Rexp>>,
}

impl Pair {
	/// Terminal node from a head and an optional tag.
	pub fn new(head: Rexp, tag: Option<Rexp>) -> Pair {
		Pair { head: Box::new(head), tag: tag.map(Box::new), rest: None }
	}

	/// Node whose tail is `rest`, stored as a list-kind value.
	pub fn with_rest(head: Rexp, tag: Option<Rexp>, rest: Pair) -> Pair {
		Pair {
			head: Box::new(head),
			tag: tag.map(Box::new),
			rest: Some(Box::new(Rexp::new(Content::List(rest)))),
		}
	}

	pub(crate) fn from_parts(head: Rexp, tag: Option<Rexp>, rest: Option<Rexp>) -> Pair {
		Pair { head: Box::new(head), tag: tag.map(Box::new), rest: rest.map(Box::new) }
	}

	/// Head value of this node.
	pub fn head(&self) -> &Rexp {
		&self.head
	}

	/// Tag value naming the head, if present.
	pub fn tag(&self) -> Option<&Rexp> {
		self.tag.as_deref()
	}

	/// Tail of the chain, if present; always a pair-kind value.
	pub fn rest(&self) -> Option<&Rexp> {
		self.rest.as_deref()
	}

	/// Number of nodes in the chain, counted without recursion.
	pub fn len(&self) -> usize {
		self.iter().count()
	}

	/// Front-to-back iterator over the nodes of the chain.
	pub fn iter(&self) -> PairIter<'_> {
		PairIter { node: Some(self) }
	}
}

// Unlinks the tail in a loop; chain length must not bound drop depth.
impl Drop for Pair {
	fn drop(&mut self) {
		let mut rest = self.rest.take();
		while let Some(mut node) = rest {
			rest = match &mut node.content {
				Content::List(pair) | Content::Lang(pair) => pair.rest.take(),
				_ => None,
			};
		}
	}
}

/// Front-to-back iterator over the nodes of a pair chain.
#[derive(Debug)]
pub struct PairIter<'a> {
	node: Option<&'a Pair>,
}

impl<'a> Iterator for PairIter<'a> {
	type Item = &'a Pair;

	fn next(&mut self) -> Option<&'a Pair> {
		let node = self.node?;
		self.node = node.rest().and_then(|rest| match rest.content() {
			Content::List(pair) | Content::Lang(pair) => Some(pair),
			_ => None,
		});
		Some(node)
	}
}
