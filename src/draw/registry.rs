use super::DrawObject;

/// Fixed-size store of draw objects
///
/// Objects are rendered in index order, so later objects paint over earlier
/// ones where they overlap.
#[derive(Debug, Clone)]
pub struct ObjectRegistry<const N: usize> {
    objects: [DrawObject; N],
}

impl<const N: usize> ObjectRegistry<N> {
    pub const fn new() -> Self {
        Self {
            objects: [DrawObject::INERT; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn objects(&self) -> &[DrawObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [DrawObject] {
        &mut self.objects
    }
}

impl<const N: usize> Default for ObjectRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}
