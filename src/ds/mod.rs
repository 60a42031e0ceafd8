pub(crate) mod dll;

pub(crate) use self::dll::{DoublyLinkedList, NodeKey};
