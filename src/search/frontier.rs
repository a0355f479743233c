use crate::search::NodeId;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Priority of a queued node: larger F first, then the node pushed earliest.
type Priority = (OrderedFloat<f64>, Reverse<u64>);

/// The open list of a best-first search. Pops the node with the largest
/// F-value; ties are broken in FIFO order of the latest push so that
/// repeated searches expand nodes in exactly the same order.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Priority>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node_id` with the given F-value. If the node is already queued
    /// its priority is replaced, which also moves it behind other nodes with
    /// the same F-value.
    pub fn push(&mut self, node_id: NodeId, f: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(node_id, (OrderedFloat(f), Reverse(sequence)));
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
