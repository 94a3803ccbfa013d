use drape::{AnchorId, Pick, PointerEvent, Scene, SceneConfig, Vec2, VertexLayout};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

// ---- Drape Demo ----

#[wasm_bindgen]
pub struct DrapeDemo {
    scene: Scene<f32>,
}

#[wasm_bindgen]
impl DrapeDemo {
    /// Size the grid from the viewport: one point every `resolution` pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(width_px: f32, height_px: f32, resolution: f32, seed: u64) -> Result<DrapeDemo, JsError> {
        let config = SceneConfig::for_viewport(width_px, height_px, resolution)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut scene = Scene::from_config(&config, VertexLayout::Xyz, &mut rng)?;
        scene.repack();
        Ok(DrapeDemo { scene })
    }

    pub fn update(&mut self, dt: f32) {
        self.scene.tick(dt);
    }

    /// `anchor` is the id of a marker under the pointer, or a negative
    /// number when the pick hit the plane at world `(x, y)`.
    pub fn pointer_down(&mut self, x: f32, y: f32, anchor: i32) {
        let anchor = usize::try_from(anchor).ok().map(AnchorId);
        let pick = self.scene.pick_world(Some(Vec2::new(x, y)), anchor);
        self.scene.push(PointerEvent::Down(pick));
    }

    pub fn pointer_miss(&mut self) {
        self.scene.push(PointerEvent::Down(Pick::Miss));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let pos = self.scene.world_to_grid(Vec2::new(x, y));
        self.scene.push(PointerEvent::Move(pos));
    }

    pub fn pointer_up(&mut self) {
        self.scene.push(PointerEvent::Up);
    }

    /// Flat segment endpoints `[x0, y0, 0, x1, y1, 0, ...]` in the line's
    /// local frame; place the line at `origin()`.
    pub fn vertices(&self) -> Vec<f32> {
        self.scene.vertices().as_slice().to_vec()
    }

    /// `[x, y]` of the line origin in world space.
    pub fn origin(&self) -> Vec<f32> {
        let o = self.scene.transform().origin();
        vec![o.x, o.y]
    }

    /// Returns flat [x0, y0, x1, y1, ...] world positions of anchor markers
    pub fn markers(&self) -> Vec<f32> {
        let markers = self.scene.marker_positions();
        let mut out = Vec::with_capacity(markers.len() * 2);
        for m in &markers {
            out.push(m.x);
            out.push(m.y);
        }
        out
    }

    pub fn segment_count(&self) -> usize {
        self.scene.vertices().segment_count()
    }
}
