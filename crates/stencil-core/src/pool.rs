use crate::Id;

pub const CONTAINER_POOL_SIZE: usize = 48;
pub const TREENODE_POOL_SIZE: usize = 48;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolItem {
    pub id: Id,
    pub last_update: u64,
}

/// Fixed-size identity registry with least-recently-touched eviction.
///
/// Lookups are a linear scan; with a few dozen slots this is cheaper than
/// hashing. Eviction forgets whatever the slot held, and the owner simply
/// re-initialises it the next time that identity shows up.
#[derive(Clone, Debug)]
pub struct Pool<const N: usize> {
    items: [PoolItem; N],
}

impl<const N: usize> Default for Pool<N> {
    fn default() -> Self {
        Self {
            items: [PoolItem::default(); N],
        }
    }
}

impl<const N: usize> Pool<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Id) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }

    /// Claims the first free slot for `id`. When every slot is taken, the
    /// one touched longest ago (lowest index on ties) is evicted.
    pub fn init(&mut self, id: Id, frame: u64) -> usize {
        let n = match self.items.iter().position(|it| it.id.is_none()) {
            Some(free) => free,
            None => self.oldest(),
        };
        let evicted = self.items[n].id;
        if evicted.is_some() {
            log::debug!(
                "pool: evicting {evicted} (last touched frame {}) for {id}",
                self.items[n].last_update
            );
        }
        self.items[n].id = id;
        self.update(n, frame);
        n
    }

    fn oldest(&self) -> usize {
        let mut n = 0;
        for i in 1..N {
            if self.items[i].last_update < self.items[n].last_update {
                n = i;
            }
        }
        n
    }

    pub fn update(&mut self, idx: usize, frame: u64) {
        self.items[idx].last_update = frame;
    }

    pub fn remove(&mut self, idx: usize) {
        self.items[idx] = PoolItem::default();
    }

    pub fn item(&self, idx: usize) -> PoolItem {
        self.items[idx]
    }

    pub fn len(&self) -> usize {
        self.items.iter().filter(|it| it.id.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}
