pub mod body_meshes;
