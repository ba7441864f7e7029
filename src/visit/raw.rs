use std::{collections::VecDeque, marker::PhantomData};

use crate::core::{GraphBase, Neighbors};

use super::VisitSet;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo<I> {
    type Item;
    type Collection: TraversalCollection<Self::Item>;
}

pub(crate) struct RawVisit<G: GraphBase, A: RawAlgo<G::VertexId>, S> {
    pub collection: A::Collection,
    pub visited: S,
    // Root that is not visited yet.
    pending: Option<G::VertexId>,
    ty: PhantomData<fn() -> G>,
}

impl<G, A, S> RawVisit<G, A, S>
where
    G: GraphBase,
    A: RawAlgo<G::VertexId>,
    S: VisitSet<G::VertexId>,
{
    pub fn new(visited: S) -> Self {
        Self {
            collection: A::Collection::default(),
            visited,
            pending: None,
            ty: PhantomData,
        }
    }

    /// The root is marked as visited lazily in the first step, so that
    /// starting from an already visited or a missing root reports nothing
    /// and leaves the visited set untouched.
    pub fn start(&mut self, root: G::VertexId) {
        self.collection.clear();
        self.pending = Some(root);
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
        self.pending = None;
    }
}

pub enum RawBfs {}

impl<I> RawAlgo<I> for RawBfs {
    type Item = I;
    type Collection = Queue<I>;
}

impl<G, S> RawVisit<G, RawBfs, S>
where
    G: Neighbors,
    S: VisitSet<G::VertexId>,
{
    pub fn next(&mut self, graph: &G) -> Option<G::VertexId> {
        if let Some(root) = self.pending.take() {
            if graph.contains_vertex(&root) && self.visited.visit(root.clone()) {
                self.collection.push(root);
            }
        }

        loop {
            let v = self.collection.pop()?;

            // Queued vertices always exist.
            let Some(neighbors) = graph.neighbors(&v) else {
                continue;
            };

            for u in neighbors {
                // Mark as visited when enqueued so that a vertex reachable
                // from multiple predecessors is in the queue at most once.
                if !self.visited.is_visited(u) {
                    self.visited.visit(u.clone());
                    self.collection.push(u.clone());
                }
            }

            return Some(v);
        }
    }
}

pub struct RawDfsFrame<I> {
    id: I,
    // Position of the next neighbor to explore.
    position: usize,
}

impl<I> RawDfsFrame<I> {
    fn new(id: I) -> Self {
        Self { id, position: 0 }
    }
}

pub enum RawDfs {}

impl<I> RawAlgo<I> for RawDfs {
    type Item = RawDfsFrame<I>;
    type Collection = Stack<RawDfsFrame<I>>;
}

impl<G, S> RawVisit<G, RawDfs, S>
where
    G: Neighbors,
    S: VisitSet<G::VertexId>,
{
    /// Emits vertices in the same order as the recursive pre-order
    /// formulation. A frame stays on the stack until all its neighbors were
    /// checked, which happens only after the subtrees of the preceding
    /// neighbors are fully explored.
    pub fn next(&mut self, graph: &G) -> Option<G::VertexId> {
        if let Some(root) = self.pending.take() {
            if graph.contains_vertex(&root) && self.visited.visit(root.clone()) {
                self.collection.push(RawDfsFrame::new(root.clone()));
                return Some(root);
            }
        }

        loop {
            let frame = self.collection.0.last_mut()?;

            match graph.neighbor_at(&frame.id, frame.position) {
                Some(u) => {
                    frame.position += 1;

                    if !self.visited.is_visited(u) {
                        self.visited.visit(u.clone());
                        self.collection.push(RawDfsFrame::new(u.clone()));
                        return Some(u.clone());
                    }
                }
                None => {
                    // All neighbors exhausted.
                    self.collection.pop();
                }
            }
        }
    }
}
