use std::ops::{Mul};

///
/// Represents a 2D affine transformation matrix
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f32; 3]; 3]);

impl Transform2D {
    ///
    /// Applies this transformation to a point, returning the transformed point
    ///
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let Transform2D(ref a) = self;

        (
            x*a[0][0] + y*a[0][1] + 1.0*a[0][2],
            x*a[1][0] + y*a[1][1] + 1.0*a[1][2]
        )
    }

    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a translation transformation
    ///
    pub fn translate(x: f32, y: f32) -> Transform2D {
        Transform2D([
            [1.0, 0.0, x    ],
            [0.0, 1.0, y    ],
            [0.0, 0.0, 1.0  ]
        ])
    }

    ///
    /// Creates a scaling transformation
    ///
    pub fn scale(scale_x: f32, scale_y: f32) -> Transform2D {
        Transform2D([
            [scale_x,   0.0,        0.0],
            [0.0,       scale_y,    0.0],
            [0.0,       0.0,        1.0]])
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output=Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = other;

        let mut res = [[0.0; 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                res[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(res)
    }
}
