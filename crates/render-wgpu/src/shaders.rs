/// WGSL shader for the cube: Blinn-Phong lighting from a single point light.
pub const CUBE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    camera_pos: vec4<f32>,
    light_pos: vec4<f32>,
    // rgb colour, w = intensity
    light_color: vec4<f32>,
    diffuse: vec4<f32>,
    // rgb colour, w = shininess
    specular: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> u: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = u.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = u.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = (u.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let l = normalize(u.light_pos.xyz - in.world_pos);
    let v = normalize(u.camera_pos.xyz - in.world_pos);
    let h = normalize(l + v);

    let radiance = u.light_color.rgb * u.light_color.w;
    let diffuse = u.diffuse.rgb * max(dot(n, l), 0.0);
    var specular = vec3<f32>(0.0);
    if (dot(n, l) > 0.0) {
        specular = u.specular.rgb * pow(max(dot(n, h), 0.0), u.specular.w);
    }
    return vec4<f32>(radiance * (diffuse + specular), 1.0);
}
"#;
