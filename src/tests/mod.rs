mod shared_backend;
