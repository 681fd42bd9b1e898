//! In-memory render host with resource accounting.

use std::collections::{BTreeSet, HashMap};

use crate::domain::backdrop::{
    Blending, ContextId, FrameHandle, ListenerId, RenderHost, Scene, Viewport,
};

/// A [`RenderHost`] that draws nothing and tracks everything.
///
/// Used by the admin CLI to preview presets and by tests to prove that
/// backdrops release every context, surface, listener and frame they take.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    container_attached: bool,
    next_id: u64,
    contexts: HashMap<ContextId, Viewport>,
    container_children: Vec<ContextId>,
    listeners: BTreeSet<u64>,
    pending_frames: BTreeSet<u64>,
    frames_rendered: u64,
}

impl HeadlessHost {
    /// Host whose container is already attached.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            container_attached: true,
            next_id: 1,
            contexts: HashMap::new(),
            container_children: Vec::new(),
            listeners: BTreeSet::new(),
            pending_frames: BTreeSet::new(),
            frames_rendered: 0,
        }
    }

    /// Host whose container has not been attached yet.
    pub fn detached(viewport: Viewport) -> Self {
        Self {
            container_attached: false,
            ..Self::new(viewport)
        }
    }

    pub fn attach_container(&mut self) {
        self.container_attached = true;
    }

    /// Simulates a window resize. Returns how many listeners would be notified.
    pub fn set_viewport(&mut self, viewport: Viewport) -> usize {
        self.viewport = viewport;
        self.listeners.len()
    }

    pub fn live_contexts(&self) -> usize {
        self.contexts.len()
    }

    pub fn container_child_count(&self) -> usize {
        self.container_children.len()
    }

    pub fn resize_listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_frame_count(&self) -> usize {
        self.pending_frames.len()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Fires every pending frame, as a browser would before invoking the
    /// frame callbacks. Returns how many fired.
    pub fn fire_pending_frames(&mut self) -> usize {
        let fired = self.pending_frames.len();
        self.pending_frames.clear();
        fired
    }

    /// Size of a live context, if it exists.
    pub fn context_viewport(&self, context: ContextId) -> Option<Viewport> {
        self.contexts.get(&context).copied()
    }

    /// Total of all held resources; zero means nothing leaked.
    pub fn held_resources(&self) -> usize {
        self.live_contexts()
            + self.container_child_count()
            + self.resize_listener_count()
            + self.pending_frame_count()
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl RenderHost for HeadlessHost {
    fn container_attached(&self) -> bool {
        self.container_attached
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_context(&mut self, viewport: Viewport, _blending: Blending) -> ContextId {
        let id = ContextId(self.next());
        self.contexts.insert(id, viewport);
        id
    }

    fn attach_surface(&mut self, context: ContextId) {
        if self.contexts.contains_key(&context) && !self.container_children.contains(&context) {
            self.container_children.push(context);
        }
    }

    fn detach_surface(&mut self, context: ContextId) {
        self.container_children.retain(|c| *c != context);
    }

    fn resize_context(&mut self, context: ContextId, viewport: Viewport) {
        if let Some(size) = self.contexts.get_mut(&context) {
            *size = viewport;
        }
    }

    fn render(&mut self, context: ContextId, _scene: &Scene) {
        if self.contexts.contains_key(&context) {
            self.frames_rendered += 1;
        }
    }

    fn dispose_context(&mut self, context: ContextId) {
        self.contexts.remove(&context);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let id = self.next();
        self.pending_frames.insert(id);
        FrameHandle(id)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending_frames.remove(&handle.0);
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let id = self.next();
        self.listeners.insert(id);
        ListenerId(id)
    }

    fn remove_resize_listener(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener.0);
    }
}
