fn main() {
    // Only run gRPC codegen when the "grpc" feature is enabled.
    // Cargo sets CARGO_FEATURE_GRPC when compiling with --features grpc.
    if std::env::var("CARGO_FEATURE_GRPC").is_ok() {
        let method = |name: &str, route: &str, input: &str, output: &str| {
            tonic_build::manual::Method::builder()
                .name(name)
                .route_name(route)
                .input_type(input)
                .output_type(output)
                .codec_path("tonic::codec::ProstCodec")
                .build()
        };

        let service = tonic_build::manual::Service::builder()
            .name("TodoService")
            .package("todoPackage")
            .method(method(
                "create_todo",
                "CreateTodo",
                "crate::schema::TodoItem",
                "crate::schema::TodoItem",
            ))
            .method(method(
                "get_todo",
                "GetTodo",
                "crate::schema::TodoId",
                "crate::schema::TodoItem",
            ))
            .method(method(
                "update_todo",
                "UpdateTodo",
                "crate::schema::TodoItem",
                "crate::schema::TodoItem",
            ))
            .method(method(
                "delete_todo",
                "DeleteTodo",
                "crate::schema::TodoId",
                "crate::schema::Empty",
            ))
            .method(method(
                "list_todos",
                "ListTodos",
                "crate::schema::Empty",
                "crate::schema::TodoList",
            ))
            .build();

        tonic_build::manual::Builder::new().compile(&[service]);
    }
}
