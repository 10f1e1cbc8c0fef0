//! Mood modifier hooks.
//!
//! A mood modifier is a caller-supplied callback that may adjust a pet.
//! Each kind of pet keeps its own list of modifiers typed over itself, so
//! a hook on an [`crate::AdvancedPet`] sees health and diseases. Modifiers
//! are kept in registration order and run only when the owner calls
//! `update_mood`; no action runs them implicitly.

/// A registered mood callback over the pet type `P`.
pub type MoodModifier<P> = Box<dyn FnMut(&mut P)>;

/// Ordered collection of mood modifiers owned by one pet.
pub struct MoodModifiers<P> {
    hooks: Vec<MoodModifier<P>>,
}

/// A pet that owns a list of mood modifiers over itself.
pub(crate) trait MoodHost: Sized {
    fn mood_modifiers_mut(&mut self) -> &mut MoodModifiers<Self>;
}

impl<P> MoodModifiers<P> {
    /// Create an empty collection.
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a modifier after all existing ones.
    pub fn push(&mut self, modifier: MoodModifier<P>) {
        self.hooks.push(modifier);
    }

    /// Number of registered modifiers.
    pub const fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no modifier is registered.
    pub const fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// Run every modifier owned by `pet` against it in registration order.
///
/// The hooks are moved out of the pet while they run so each one can
/// borrow the pet mutably. Modifiers registered during the run are kept
/// and go after the existing ones.
pub(crate) fn run<P: MoodHost>(pet: &mut P) {
    let mut hooks = core::mem::take(&mut pet.mood_modifiers_mut().hooks);
    for hook in &mut hooks {
        hook(&mut *pet);
    }
    let added = core::mem::take(&mut pet.mood_modifiers_mut().hooks);
    hooks.extend(added);
    pet.mood_modifiers_mut().hooks = hooks;
}

impl<P> Default for MoodModifiers<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> core::fmt::Debug for MoodModifiers<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MoodModifiers")
            .field("count", &self.hooks.len())
            .finish()
    }
}
