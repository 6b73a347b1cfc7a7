//! Data-access templates. Rendered with `name`, `pascal`, `camel` and
//! `api_client` in the context.

pub const TYPES_TS: &str = r#"export interface {{pascal}}ItemDto {
  id: string;
  // Add fields here
}

export interface Create{{pascal}}Dto {
  // Add fields here
}

export interface Update{{pascal}}Dto {
  // Add fields here
}
"#;

pub const SERVICE_TS: &str = r#"import { axiosInstance } from '{{api_client}}';
import type { {{pascal}}ItemDto, Create{{pascal}}Dto, Update{{pascal}}Dto } from './types';

export const {{camel}}Service = {
  fetchAll: async (): Promise<{{pascal}}ItemDto[]> => {
    const { data } = await axiosInstance.get<{{pascal}}ItemDto[]>('/{{camel}}');
    return data;
  },

  fetchById: async (id: string): Promise<{{pascal}}ItemDto> => {
    const { data } = await axiosInstance.get<{{pascal}}ItemDto>(`/{{camel}}/${id}`);
    return data;
  },

  create: async (dto: Create{{pascal}}Dto): Promise<{{pascal}}ItemDto> => {
    const { data } = await axiosInstance.post<{{pascal}}ItemDto>('/{{camel}}', dto);
    return data;
  },

  update: async (id: string, dto: Update{{pascal}}Dto): Promise<{{pascal}}ItemDto> => {
    const { data } = await axiosInstance.patch<{{pascal}}ItemDto>(`/{{camel}}/${id}`, dto);
    return data;
  },

  delete: async (id: string): Promise<void> => {
    await axiosInstance.delete(`/{{camel}}/${id}`);
  },
};
"#;

pub const KEYS_TS: &str = r#"export const {{camel}}Keys = {
  all: ['{{camel}}'] as const,
  lists: () => [...{{camel}}Keys.all, 'list'] as const,
  list: (filters?: Record<string, unknown>) => [...{{camel}}Keys.lists(), filters] as const,
  details: () => [...{{camel}}Keys.all, 'detail'] as const,
  detail: (id: string) => [...{{camel}}Keys.details(), id] as const,
};
"#;

pub const HOOKS_TS: &str = r#"import { useQuery, useMutation, useQueryClient } from '@tanstack/react-query';
import { {{camel}}Service } from './{{name}}.service';
import { {{camel}}Keys } from './{{name}}.keys';
import type { Create{{pascal}}Dto, Update{{pascal}}Dto } from './types';

export const use{{pascal}}List = () => {
  return useQuery({
    queryKey: {{camel}}Keys.lists(),
    queryFn: {{camel}}Service.fetchAll,
  });
};

export const use{{pascal}}Detail = (id: string) => {
  return useQuery({
    queryKey: {{camel}}Keys.detail(id),
    queryFn: () => {{camel}}Service.fetchById(id),
    enabled: !!id,
  });
};

export const use{{pascal}}Create = () => {
  const queryClient = useQueryClient();

  return useMutation({
    mutationFn: (dto: Create{{pascal}}Dto) => {{camel}}Service.create(dto),
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.lists() });
    },
  });
};

export const use{{pascal}}Update = () => {
  const queryClient = useQueryClient();

  return useMutation({
    mutationFn: ({ id, dto }: { id: string; dto: Update{{pascal}}Dto }) =>
      {{camel}}Service.update(id, dto),
    onSuccess: (_, { id }) => {
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.detail(id) });
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.lists() });
    },
  });
};

export const use{{pascal}}Delete = () => {
  const queryClient = useQueryClient();

  return useMutation({
    mutationFn: (id: string) => {{camel}}Service.delete(id),
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: {{camel}}Keys.lists() });
    },
  });
};
"#;
