/// double linked list
use crate::{prelude::*, End};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generation-checked address of a node in the arena
    pub(crate) struct NodeKey;
}

const ENDS: [End; 2] = [End::Head, End::Tail];

#[derive(Clone, Debug)]
pub(crate) struct Node<Item> {
    pub item: Item,
    /// neighbours, indexed by the side they sit on
    pub links: [Option<NodeKey>; 2],
}

impl<Item> Node<Item> {
    pub fn new(item: Item) -> Self {
        Self { item, links: [None, None] }
    }

    /// The neighbour on the `end` side of this node.
    #[inline]
    pub fn link(&self, end: End) -> Option<NodeKey> {
        self.links[end.idx()]
    }
}

/// Nodes live in a slot arena; anchors and links are keys into it.
#[derive(Clone, Debug)]
pub(crate) struct DoublyLinkedList<Item> {
    nodes: SlotMap<NodeKey, Node<Item>>,
    ends: [Option<NodeKey>; 2],
    size: usize,
}

impl<Item> Default for DoublyLinkedList<Item> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<Item> DoublyLinkedList<Item> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            ends: [None, None],
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Current anchor of `end`, `None` when empty.
    pub fn anchor(&self, end: End) -> Option<NodeKey> {
        self.ends[end.idx()]
    }

    pub fn node(&self, key: NodeKey) -> &Node<Item> {
        &self.nodes[key]
    }

    pub fn item_mut(&mut self, key: NodeKey) -> &mut Item {
        &mut self.nodes[key].item
    }

    /// Link a new node in as the anchor of `end`.
    pub fn push(&mut self, end: End, item: Item) -> NodeKey {
        let key = self.nodes.insert(Node::new(item));

        match self.ends[end.idx()] {
            None => {
                // first node is both anchors
                self.ends = [Some(key), Some(key)];
            }
            Some(anchor) => {
                self.nodes[key].links[end.opposite().idx()] = Some(anchor);
                self.nodes[anchor].links[end.idx()] = Some(key);
                self.ends[end.idx()] = Some(key);
            }
        }

        self.size += 1;
        key
    }

    /// Unlink and free the anchor of `end`.
    pub fn pop(&mut self, end: End) -> Option<Item> {
        let key = self.ends[end.idx()]?;
        self.unlink(key)
    }

    /// Unlink `key` from wherever it sits and free its node.
    ///
    /// Each neighbour is pointed past the node; a missing neighbour means
    /// the node was an anchor, and the anchor moves inward instead.
    pub fn unlink(&mut self, key: NodeKey) -> Option<Item> {
        let node = self.nodes.remove(key)?;

        for &side in ENDS.iter() {
            let away = side.opposite();
            match node.link(side) {
                Some(neighbour) => self.nodes[neighbour].links[away.idx()] = node.link(away),
                None => self.ends[side.idx()] = node.link(away),
            }
        }

        self.size -= 1;
        Some(node.item)
    }

    /// Walk `i` steps inward from the anchor of `end`.
    pub fn nth(&self, end: End, i: usize) -> Option<NodeKey> {
        let inward = end.opposite();
        let mut cursor = self.ends[end.idx()];
        for _ in 0..i {
            cursor = self.nodes[cursor?].link(inward);
        }
        cursor
    }

    /// First node, walking inward from `end`, whose item satisfies `pred`.
    pub fn find<P>(&self, end: End, mut pred: P) -> Option<NodeKey>
    where
        P: FnMut(&Item) -> bool,
    {
        let inward = end.opposite();
        let mut cursor = self.ends[end.idx()];
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if pred(&node.item) {
                return Some(key)
            }
            cursor = node.link(inward);
        }
        None
    }

    /// Visit every item from head to tail.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Item),
    {
        let mut cursor = self.ends[End::Head.idx()];
        while let Some(key) = cursor {
            let node = &mut self.nodes[key];
            f(&mut node.item);
            cursor = node.link(End::Tail);
        }
    }

    /// Free every node, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let freed = self.size;
        self.nodes.clear();
        self.ends = [None, None];
        self.size = 0;
        freed
    }

    /// Verify anchors, back links and chain length in both directions.
    pub fn check(&self) -> IResult<()> {
        if self.size != self.nodes.len() {
            return Err(Error::Corrupted("length does not match the node count"))
        }

        match self.ends {
            [None, None] if self.size == 0 => return Ok(()),
            [None, None] => return Err(Error::Corrupted("non-empty chain without anchors")),
            [Some(_), Some(_)] => {}
            _ => return Err(Error::Corrupted("exactly one anchor is absent")),
        }

        for &from in ENDS.iter() {
            let toward = from.opposite();
            let mut prev = None;
            let mut cursor = self.ends[from.idx()];
            let mut count = 0;

            while let Some(key) = cursor {
                let node = self
                    .nodes
                    .get(key)
                    .ok_or(Error::Corrupted("link to a freed node"))?;

                if node.link(from) != prev {
                    return Err(Error::Corrupted("back link does not match the walk"))
                }

                count += 1;
                if count > self.size {
                    return Err(Error::Corrupted("chain is longer than its length"))
                }

                prev = Some(key);
                cursor = node.link(toward);
            }

            if prev != self.ends[toward.idx()] {
                return Err(Error::Corrupted("walk does not finish at the far anchor"))
            }
            if count != self.size {
                return Err(Error::Corrupted("chain is shorter than its length"))
            }
        }

        Ok(())
    }
}
