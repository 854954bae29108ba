//! Shader source fixtures

pub const BASIC_VERT: &str = "#version 450\nvoid main() { gl_Position = vec4(0.0); }\n";

pub const LIT_FRAG: &str = r#"#version 450
#include "common/lighting.glsl"
layout(location = 0) out vec4 color;
void main() { color = vec4(light(), 1.0); }
"#;

pub const LIGHTING_GLSL: &str = "vec3 light() { return vec3(1.0); }\n";

pub const MESH_SLANG: &str = r#"import module/common;

[shader("vertex")]
float4 vert_main(float3 pos : POSITION) : SV_Position { return float4(pos, 1.0); }

[shader("fragment")]
float4 frag_main() : SV_Target { return shade(); }
"#;

pub const COMMON_SLANG: &str = "float4 shade() { return float4(1.0); }\n";

/// A Slang file that only holds helpers
pub const UTIL_SLANG: &str = "float square(float x) { return x * x; }\n";
