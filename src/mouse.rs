/// Pointer position and velocity in container-centred coordinates (y up).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
    pub prev_x: f64,
    pub prev_y: f64,
    pub v_x: f64,
    pub v_y: f64,
}

impl MouseState {
    /// Records a pointer move given in client pixels.
    ///
    /// `width` and `height` are the container size the coordinates are
    /// centred on.
    pub fn on_move(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = client_x - width / 2.0;
        self.y = height / 2.0 - client_y;
        self.v_x = self.x - self.prev_x;
        self.v_y = self.y - self.prev_y;
    }

    /// Value of the `mouse` uniform: `(x, y, v_x, v_y)`.
    pub fn to_vec4(&self) -> [f32; 4] {
        [self.x as f32, self.y as f32, self.v_x as f32, self.v_y as f32]
    }
}
